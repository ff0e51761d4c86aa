#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use pdp_cli::extensions::import::import_problem;
use pdp_cli::format::problem::serialize_problem;

const FORMAT_ARG_NAME: &str = "FORMAT";
const CITIES_ARG_NAME: &str = "cities";
const VEHICLES_ARG_NAME: &str = "vehicles";
const TASKS_ARG_NAME: &str = "tasks";
const ROADS_ARG_NAME: &str = "roads";

pub fn get_import_app() -> Command {
    let file_arg = |name: &'static str, short: char, help: &'static str, required: bool| {
        Arg::new(name).help(help).short(short).long(name).required(required)
    };

    Command::new("import")
        .about("Provides the way to import problem from various formats")
        .arg(Arg::new(FORMAT_ARG_NAME).help("Specifies input type").required(true).value_parser(["csv"]).index(1))
        .arg(file_arg(CITIES_ARG_NAME, 'c', "Sets cities file", true))
        .arg(file_arg(VEHICLES_ARG_NAME, 'v', "Sets vehicles file", true))
        .arg(file_arg(TASKS_ARG_NAME, 't', "Sets tasks file", true))
        .arg(file_arg(ROADS_ARG_NAME, 'r', "Sets roads file, cities are fully connected when omitted", false))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_import(matches: &ArgMatches) -> Result<(), String> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("input format is not specified")?;

    let readers = [CITIES_ARG_NAME, VEHICLES_ARG_NAME, TASKS_ARG_NAME, ROADS_ARG_NAME]
        .iter()
        .filter_map(|&arg_name| matches.get_one::<String>(arg_name).map(|path| (arg_name, path)))
        .map(|(arg_name, path)| open_file(path, arg_name).map(BufReader::new))
        .collect::<Result<Vec<_>, _>>()?;

    let problem = import_problem(input_format, Some(readers)).map_err(|err| format!("cannot import problem: '{err}'"))?;

    let mut out_buffer = get_out_buffer(matches)?;
    serialize_problem(&problem, &mut out_buffer).map_err(|err| err.to_string())?;

    out_buffer.flush().map_err(|err| format!("cannot write problem: '{err}'"))
}
