use super::*;
use std::fs::File;

fn open_readers(paths: &[&str]) -> Vec<BufReader<File>> {
    paths.iter().map(|path| BufReader::new(File::open(path).expect("cannot open csv file"))).collect()
}

#[test]
fn can_import_csv_problem() {
    let readers = open_readers(&[
        "../data/csv/cities.csv",
        "../data/csv/vehicles.csv",
        "../data/csv/tasks.csv",
        "../data/csv/roads.csv",
    ]);

    let problem = import_problem("csv", Some(readers)).unwrap();

    assert_eq!(problem.topology.cities.len(), 4);
    assert_eq!(problem.topology.roads.as_ref().map(|roads| roads.len()), Some(4));
    assert_eq!(problem.vehicles.len(), 3);
    assert_eq!(problem.tasks.len(), 4);
    assert_eq!(problem.agents.as_ref().map(|agents| agents.len()), Some(2));
}

parameterized_test! {can_reject_invalid_input, (format, paths, expected), {
    let result = import_problem(format, Some(open_readers(paths)));

    assert!(result.err().is_some_and(|err| err.to_string().contains(expected)));
}}

can_reject_invalid_input! {
    case01_missing_files: ("csv", &["../data/csv/cities.csv"], "csv format expects"),
    case02_unknown_format: ("xml", &["../data/csv/cities.csv"], "unknown format: 'xml'"),
}
