use std::io;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::rngs::OsRng;

use random_profile::cli::Cli;
use random_profile::error::Result;
use random_profile::geo::GeoDataset;
use random_profile::logging;
use random_profile::output::{print_profile, save_profile};
use random_profile::profile::generate_profile;
use random_profile::types::Config;

fn main() {
    logging::init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => Cli::command().error(ErrorKind::ArgumentConflict, e).exit(),
    };

    if let Err(e) = run(&config) {
        eprintln!("random_profile error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let geo = GeoDataset::bundled()?;
    let profile = generate_profile(&mut OsRng, config, &geo)?;

    let stdout = io::stdout();
    print_profile(stdout.lock(), &profile, config.show_password)?;

    if let Some(ref path) = config.save {
        save_profile(path, &profile, config.format)?;
    }

    Ok(())
}
