use crate::commands::auction::{get_auction_app, run_auction};
use crate::commands::import::{get_import_app, run_import};
use crate::commands::solve::{get_solve_app, run_solve};
use clap::{ArgMatches, Command};
use std::process;

pub fn get_app() -> Command {
    Command::new("Pickup and Delivery Auction Planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to the pickup and delivery auction planner")
        .subcommand(get_solve_app())
        .subcommand(get_auction_app())
        .subcommand(get_import_app())
}

pub fn run_subcommand(matches: ArgMatches) {
    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("auction", auction_matches)) => run_auction(auction_matches),
        Some(("import", import_matches)) => run_import(import_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
