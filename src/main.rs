use std::env;
use std::process;

use log::{error, warn};
use mmldur::{track_duration_from_file, Config, DurationReport, Severity};

const USAGE: &str = "Usage: mmldur [--json] [--config <config.yaml>] [-v|-vv] <track.mml>...";

struct Options {
    json: bool,
    verbose: usize,
    config_path: Option<String>,
    inputs: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        json: false,
        verbose: 0,
        config_path: None,
        inputs: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "-v" => options.verbose += 1,
            "-vv" => options.verbose += 2,
            "--config" => match iter.next() {
                Some(path) => options.config_path = Some(path.clone()),
                None => return Err("--config requires a file".to_string()),
            },
            flag if flag.starts_with('-') => return Err(format!("Unknown option '{}'", flag)),
            input => options.inputs.push(input.to_string()),
        }
    }

    if options.inputs.is_empty() {
        return Err("No input tracks given".to_string());
    }
    Ok(options)
}

fn log_diagnostics(path: &str, report: &DurationReport) {
    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            Severity::Error => error!("{}: {}", path, diagnostic),
            Severity::Warning => warn!("{}: {}", path, diagnostic),
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let level = match options.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("Cannot initialize logging: {}", e);
    }

    let config = match &options.config_path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut reports = Vec::new();
    for path in &options.inputs {
        match track_duration_from_file(path, &config) {
            Ok(report) => {
                log_diagnostics(path, &report);
                reports.push((path.as_str(), report));
            }
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
    }

    if options.json {
        let all: Vec<&DurationReport> = reports.iter().map(|(_, report)| report).collect();
        match serde_json::to_string_pretty(&all) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Cannot serialize reports: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    for (path, report) in &reports {
        println!("{}: {:.3}s ({})", path, report.total_seconds, report.clock());
    }

    // Tracks of one song play side by side, so the song lasts as long as the longest
    if reports.len() > 1 {
        let longest = reports
            .iter()
            .map(|(_, report)| report.total_seconds)
            .fold(0.0, f64::max);
        println!("longest: {:.3}s ({})", longest, mmldur::format_clock(longest));
    }
}
