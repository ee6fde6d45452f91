// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

#![deny(warnings)]

use clap::{App, Arg, ArgMatches};
use std::error::Error;
use std::fmt::{Display, self};
use std::fs::File;
use std::io::{self, Read};
use std::num::ParseFloatError;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

fn run() -> Result<(), AppError> {
    let ratio_help = format!("Device pixel ratio of the display, picks the \
        image scale (default: {})", staticmap::StaticMap::DEFAULT_PIXEL_RATIO);
    let matches = App::new(APP_NAME)
        .version(APP_VERSION)
        .author(APP_AUTHORS)
        .about("Encodes static map requests as Google Static Maps URLs")
        .arg(
            Arg::with_name("CONFIG")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Path to configuration file")
        )
        .arg(
            Arg::with_name("REQUEST")
                .short("r")
                .long("request")
                .takes_value(true)
                .help("Path to map request file (default: standard input)")
        )
        .arg(
            Arg::with_name("KEY")
                .short("k")
                .long("key")
                .takes_value(true)
                .help("API key, overrides the configured one")
        )
        .arg(
            Arg::with_name("PIXEL_RATIO")
                .short("p")
                .long("pixel-ratio")
                .takes_value(true)
                .help(&ratio_help)
        )
        .arg(
            Arg::with_name("JSON")
                .long("json")
                .help("Print URL, blur radius and warnings as JSON")
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .long("verbose")
                .help("Log the encoded URL")
        )
        .get_matches();
    init_logging(matches.is_present("VERBOSE"));
    let mut map = match matches.value_of("CONFIG") {
        Some(path) => {
            let config_file = File::open(Path::new(path))
                .map_err(AppError::FailedToOpenConfigFile)?;
            staticmap::StaticMap::from_config(config_file)
                .map_err(AppError::BadConfigFile)?
        }
        None => staticmap::StaticMap::new(""),
    };
    if let Some(key) = matches.value_of("KEY") {
        map = map.api_key(key);
    }
    if let Some(ratio) = matches.value_of("PIXEL_RATIO") {
        map = map.pixel_ratio(ratio.parse().map_err(AppError::BadPixelRatio)?);
    }
    let request = read_request(&matches)?;
    let source = map.source(request);
    if matches.is_present("JSON") {
        let json = serde_json::to_string_pretty(&source)
            .map_err(AppError::FailedToWriteOutput)?;
        println!("{}", json);
    } else {
        println!("{}", source.url());
    }
    Ok(())
}

fn read_request(matches: &ArgMatches) -> Result<staticmap::MapRequest, AppError> {
    let input: Box<dyn Read> = match matches.value_of("REQUEST") {
        Some(path) => Box::new(File::open(Path::new(path))
            .map_err(AppError::FailedToOpenRequestFile)?),
        None => Box::new(io::stdin()),
    };
    staticmap::MapRequest::from_reader(input).map_err(AppError::BadRequest)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {"debug"} else {"warn"};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let code = if let Err(e) = run() {
        print_error(e);
        1
    } else {
        0
    };
    std::process::exit(code)
}

fn print_error(e: AppError) {
    eprintln!("Error: {}", e);
    let mut e: &dyn Error = &e;
    while let Some(cause) = e.source() {
        eprintln!("Because: {}", cause);
        e = cause;
    }
}

#[derive(Debug)]
enum AppError {
    BadConfigFile(staticmap::Error),
    BadPixelRatio(ParseFloatError),
    BadRequest(staticmap::Error),
    FailedToOpenConfigFile(io::Error),
    FailedToOpenRequestFile(io::Error),
    FailedToWriteOutput(serde_json::Error),
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadConfigFile(_) => f.write_str("Bad configuration file"),
            AppError::BadPixelRatio(_) => f.write_str("Bad pixel ratio"),
            AppError::BadRequest(_) => f.write_str("Bad map request"),
            AppError::FailedToOpenConfigFile(_) =>
                f.write_str("Failed to open configuration file"),
            AppError::FailedToOpenRequestFile(_) =>
                f.write_str("Failed to open request file"),
            AppError::FailedToWriteOutput(_) =>
                f.write_str("Failed to write output"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::BadConfigFile(e) => Some(e),
            AppError::BadPixelRatio(e) => Some(e),
            AppError::BadRequest(e) => Some(e),
            AppError::FailedToOpenConfigFile(e) => Some(e),
            AppError::FailedToOpenRequestFile(e) => Some(e),
            AppError::FailedToWriteOutput(e) => Some(e),
        }
    }
}
