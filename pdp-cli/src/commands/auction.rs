#[cfg(test)]
#[path = "../../tests/unit/commands/auction_test.rs"]
mod auction_test;

use super::*;
use pdp_cli::extensions::auction::{AuctionAgent, AuctionHost};
use pdp_cli::extensions::config::{create_environment, create_search_config, create_time_budgets};
use pdp_cli::format::problem::JsonProblem;
use pdp_cli::format::report::{create_report, serialize_report};
use pdp_core::auction::MarginalCostBidder;

const PROBLEM_ARG_NAME: &str = "PROBLEM";

pub fn get_auction_app() -> Command {
    add_planner_args(
        Command::new("auction")
            .about("Runs a sequential sealed-bid auction for the problem tasks between its agents")
            .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1)),
    )
}

pub fn run_auction(matches: &ArgMatches) -> Result<(), String> {
    let config = get_config(matches)?;

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let model = BufReader::new(open_file(problem_path, "problem")?)
        .read_json()
        .map_err(|err| format!("cannot read problem: '{err}'"))?;

    let search = create_search_config(&config).map_err(|err| format!("invalid config: '{err}'"))?;
    let environment = create_environment(&config);

    let agents = model
        .agents
        .iter()
        .map(|agent| AuctionAgent {
            id: agent.id,
            vehicles: agent.vehicles.clone(),
            behavior: Box::new(MarginalCostBidder::new(search.clone(), environment.clone())),
        })
        .collect();

    let budgets = create_time_budgets(&config);
    let host = AuctionHost::new(agents, model.topology.clone(), budgets, environment.logger.clone());
    let outcome = host.run(model.tasks.as_slice()).map_err(|err| format!("auction failed: '{err}'"))?;

    let report = create_report(&outcome, model.topology.as_ref());

    serialize_report(get_out_buffer(matches)?, &report).map_err(|err| err.to_string())
}
