use std::{env, fs, io::{self, Read}, process::ExitCode, time::Instant};

use tfidf_summarizer::{StemLanguage, Summarizer, SummarizerConfig};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

const THRESHOLD_ENV: &str = "SUMMARIZER_THRESHOLD";
const LANGUAGE_ENV: &str = "SUMMARIZER_LANGUAGE";

struct Args {
    config: SummarizerConfig,
    report: bool,
    input: Option<String>,
}

fn print_usage() {
    eprintln!("Usage: tfidf-summarizer [--threshold T] [--language LANG] [--report] [FILE]");
    eprintln!("If FILE is omitted, stdin is read. The summary is written to stdout.");
    eprintln!("Env: {THRESHOLD_ENV}, {LANGUAGE_ENV}, RUST_LOG");
}

// flag > env > default
fn parse_args() -> Result<Option<Args>, String> {
    let mut config = SummarizerConfig::default();
    if let Ok(v) = env::var(THRESHOLD_ENV) {
        config.threshold = v
            .parse::<f64>()
            .map_err(|_| format!("{THRESHOLD_ENV} must be a number, got {v:?}"))?;
    }
    if let Ok(v) = env::var(LANGUAGE_ENV) {
        config.language = v.parse::<StemLanguage>()?;
    }

    let mut report = false;
    let mut input = None;
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--threshold" | "-t" => {
                let v = args.next().ok_or("--threshold requires a number")?;
                config.threshold = v
                    .parse::<f64>()
                    .map_err(|_| format!("--threshold must be a number, got {v:?}"))?;
            }
            "--language" | "-l" => {
                let v = args.next().ok_or("--language requires a name")?;
                config.language = v.parse::<StemLanguage>()?;
            }
            "--report" => report = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            other => {
                if input.is_none() {
                    input = Some(other.to_string());
                } else {
                    warn!(arg = other, "extra argument ignored");
                }
            }
        }
    }
    Ok(Some(Args { config, report, input }))
}

fn read_document(input: Option<&str>) -> io::Result<String> {
    match input {
        Some("-") | None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    let document = match read_document(args.input.as_deref()) {
        Ok(document) => document,
        Err(e) => {
            error!(input = args.input.as_deref().unwrap_or("<stdin>"), "failed to read document: {e}");
            return ExitCode::FAILURE;
        }
    };

    let summarizer = Summarizer::from_config(&args.config);
    let start = Instant::now();
    let output = if args.report {
        match summarizer.score(&document) {
            Ok(scored) => serde_json::to_string_pretty(&scored).map_err(|e| e.to_string()),
            Err(e) => Err(format!("{e} ({:?})", e.kind())),
        }
    } else {
        summarizer
            .summarize(&document, args.config.threshold)
            .map_err(|e| format!("{e} ({:?})", e.kind()))
    };
    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        bytes = document.len(),
        "summarize finished"
    );

    match output {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
