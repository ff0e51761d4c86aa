//! Module provides various helper functionality.

pub mod auction;
pub mod config;
pub mod import;
