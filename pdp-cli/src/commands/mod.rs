use clap::{Arg, ArgMatches, Command};

pub mod auction;
pub mod import;
pub mod solve;

use pdp_cli::extensions::config::{Config, read_config};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const SEED_ARG_NAME: &str = "seed";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Adds arguments shared by commands which run the planner.
fn add_planner_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to a planner configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed, overrides the one from configuration")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
}

/// Reads configuration if it is specified and applies the seed override.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string())?,
        None => Config::default(),
    };

    Ok(match parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")? {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn get_out_buffer(matches: &ArgMatches) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}
