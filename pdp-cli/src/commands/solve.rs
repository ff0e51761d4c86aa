#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use pdp_cli::extensions::config::{create_environment, create_search_config, create_time_budgets};
use pdp_cli::format::problem::JsonProblem;
use pdp_cli::format::solution::{create_solution, serialize_solution};
use pdp_core::solver::Solver;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const TIME_ARG_NAME: &str = "max-time";

pub fn get_solve_app() -> Command {
    add_planner_args(
        Command::new("solve")
            .about("Plans delivery of all tasks by all vehicles of the problem")
            .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
            .arg(
                Arg::new(TIME_ARG_NAME)
                    .help("Specifies time budget in milliseconds, overrides the plan budget from configuration")
                    .short('t')
                    .long(TIME_ARG_NAME)
                    .required(false),
            ),
    )
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), String> {
    let config = get_config(matches)?;
    let config = match parse_int_value::<u64>(matches, TIME_ARG_NAME, "max time")? {
        Some(max_time) => config.with_plan_budget(max_time),
        None => config,
    };

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let model = BufReader::new(open_file(problem_path, "problem")?)
        .read_json()
        .map_err(|err| format!("cannot read problem: '{err}'"))?;

    let search = create_search_config(&config).map_err(|err| format!("invalid config: '{err}'"))?;
    let budgets = create_time_budgets(&config);
    let solver = Solver::new(search, create_environment(&config));

    let result = solver
        .solve(Arc::new(model.create_problem()), budgets.plan)
        .map_err(|err| format!("cannot solve problem: '{err}'"))?;

    let solution = create_solution(
        result.plans.as_slice(),
        model.vehicles.as_slice(),
        model.topology.as_ref(),
        Some(&result.statistics),
    );

    serialize_solution(get_out_buffer(matches)?, &solution).map_err(|err| err.to_string())
}
