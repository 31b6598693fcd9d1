//! Interactive console over an airport database.
#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    rust_2018_idioms,
    missing_debug_implementations,
    missing_docs
)]
#![allow(clippy::module_inception)]
#![allow(clippy::implicit_return)]
#![allow(clippy::blanket_clippy_restriction_lints)]
#![allow(clippy::shadow_same)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::separated_literal_suffix)]
#![allow(clippy::float_arithmetic)]
#![allow(clippy::use_self)]
#![allow(clippy::pattern_type_mismatch)]
#![allow(clippy::pub_use)]
#![allow(clippy::missing_docs_in_private_items)]
#![allow(missing_debug_implementations)]

mod menu;

use airport_stats::components::prelude::*;
use airport_stats::AirportError;
use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Computes distance statistics over a file of airports.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Airports file: id, name, city, country, two ignored fields, latitude, longitude
    #[arg(short, long, default_value = "data/airports.dat")]
    airports: PathBuf,
    /// Countries file with a `country_name,population,area` header
    #[arg(short, long)]
    countries: Option<PathBuf>,
    /// Field delimiter of the airports file
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
    /// Whether the airports file starts with a header line
    #[arg(long)]
    has_headers: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("{:?} is not a single ASCII character", s)),
    }
}

fn run(args: &Args) -> Result<(), AirportError> {
    let database = AirportDatabase::from_file(&args.airports, args.has_headers, args.delimiter)?;
    let countries = args
        .countries
        .as_ref()
        .map(Countries::from_file)
        .transpose()?;
    if let Some(countries) = &countries {
        info!("Loaded {} countries", countries.countries.len());
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::Menu::new(&database, countries.as_ref()).run(stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
