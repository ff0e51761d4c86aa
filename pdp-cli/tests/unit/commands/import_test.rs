use super::*;
use crate::cli::get_app;
use pdp_cli::format::problem::JsonProblem;

const CITIES_PATH: &str = "../data/csv/cities.csv";
const VEHICLES_PATH: &str = "../data/csv/vehicles.csv";
const TASKS_PATH: &str = "../data/csv/tasks.csv";
const ROADS_PATH: &str = "../data/csv/roads.csv";

#[test]
fn can_import_csv_problem_from_args() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "pdp-cli",
        "import",
        "csv",
        "--cities",
        CITIES_PATH,
        "--vehicles",
        VEHICLES_PATH,
        "--tasks",
        TASKS_PATH,
        "--roads",
        ROADS_PATH,
        "--out-result",
        tmpfile.path().to_str().unwrap(),
    ];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_import(matches.subcommand_matches("import").unwrap()).unwrap();

    let model = BufReader::new(tmpfile.as_file()).read_json().unwrap();
    assert_eq!(model.topology.size(), 4);
    assert_eq!(model.vehicles.len(), 3);
    assert_eq!(model.tasks.len(), 4);
    assert_eq!(model.agents.iter().map(|agent| agent.vehicles.len()).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn can_report_missing_input_file() {
    let args = vec!["pdp-cli", "import", "csv", "-c", CITIES_PATH, "-v", "../data/csv/unknown.csv", "-t", TASKS_PATH];
    let matches = get_app().try_get_matches_from(args).unwrap();

    let result = run_import(matches.subcommand_matches("import").unwrap());

    assert!(result.err().is_some_and(|err| err.contains("cannot open vehicles file")));
}
