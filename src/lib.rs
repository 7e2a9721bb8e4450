pub mod cli;
pub mod error;
pub mod generator;
pub mod geo;
pub mod logging;
pub mod output;
pub mod profile;
pub mod types;
