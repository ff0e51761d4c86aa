//! A command line interface to the pickup and delivery auction planner.

#[cfg(test)]
#[path = "../tests/helpers/macros.rs"]
#[macro_use]
mod macros;

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod cli;
mod commands;

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}
