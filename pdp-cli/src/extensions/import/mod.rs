//! Import command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

mod csv;
pub use self::csv::*;

use crate::format::problem::Problem;
use pdp_core::utils::GenericError;
use std::io::{BufReader, Read};

/// Imports problem from specific format. For `csv`, readers are expected in the following
/// order: cities, vehicles, tasks and, optionally, roads.
pub fn import_problem<R: Read>(
    input_format: &str,
    readers: Option<Vec<BufReader<R>>>,
) -> Result<Problem, GenericError> {
    match (input_format, readers) {
        ("csv", Some(readers)) if (3..=4).contains(&readers.len()) => {
            let mut readers = readers.into_iter();
            let (Some(cities), Some(vehicles), Some(tasks)) = (readers.next(), readers.next(), readers.next()) else {
                return Err("csv format expects cities, vehicles and tasks files".into());
            };
            let roads = readers.next();

            read_csv_problem(cities, vehicles, tasks, roads).map_err(|err| format!("cannot read csv: {err}").into())
        }
        ("csv", _) => Err("csv format expects cities, vehicles, tasks and optionally roads files as an input".into()),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
