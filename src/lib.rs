//! Ranks the categories of a text coverage report by a fixed priority list,
//! prints a summary and keeps a JSON snapshot of the last run.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod workers;
