use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::{Arg, ArgAction, Command};
use log::{error, info, warn};
use std::fs::OpenOptions;
use std::io;

mod config;
mod error;
mod handlers;
mod models;
mod render;
mod services;
mod utils;

use config::{Config, Fallback};
use error::WordStoreError;
use models::{AppState, WordLists};
use services::word_store::{self, LoadPolicy};

// Logs go to stderr unless a log file is given; RUST_LOG overrides the level
fn init_logging(log_file: Option<&String>, debug: bool) -> io::Result<()> {
    let default_filter = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    );

    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_output)));
    }

    builder.init();
    Ok(())
}

fn load_lists(known_path: &str, missing_path: &str, policy: LoadPolicy) -> Result<WordLists, WordStoreError> {
    info!("Loading word lists ({:?} policy)", policy);
    let known = word_store::load(known_path, "known", policy)?;
    let missing = word_store::load(missing_path, "missing", policy)?;
    Ok(WordLists::new(known, missing))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let matches = Command::new("motsd")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ron Straight <straightre@gmail.com>")
        .about("French vocabulary list viewer and flashcard service")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("127.0.0.1:5000")
                .help("Specify the listen address (e.g., 0.0.0.0:5000)"),
        )
        .arg(
            Arg::new("known-csv")
                .long("known-csv")
                .num_args(1)
                .default_value("words_good.csv")
                .help("CSV file of known words (word,pos,gender_or_group)"),
        )
        .arg(
            Arg::new("missing-csv")
                .long("missing-csv")
                .num_args(1)
                .default_value("words_missing.csv")
                .help("CSV file of missing words (word,pos)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Refuse to start if any CSV row is malformed instead of skipping it"),
        )
        .get_matches();

    let listen_host = matches
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    let known_csv = matches
        .get_one::<String>("known-csv")
        .expect("known-csv argument must always have a default value");
    let missing_csv = matches
        .get_one::<String>("missing-csv")
        .expect("missing-csv argument must always have a default value");
    let log_file = matches.get_one::<String>("log-file");
    let policy = if matches.get_flag("strict") { LoadPolicy::Strict } else { LoadPolicy::Skip };

    let (config, fallbacks) = Config::load();
    init_logging(log_file, config.debug)?;
    for fallback in &fallbacks {
        match fallback {
            Fallback::Unset { .. } => info!("{}", fallback),
            Fallback::Invalid { .. } => warn!("{}", fallback),
        }
    }
    info!("Environment: {}, debug: {}", config.env, config.debug);

    let lists = load_lists(known_csv, missing_csv, policy).map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    let state = AppState::new(lists, config);
    info!(
        "Serving {} known ({}) and {} missing ({}) words on {}",
        state.lists.known.len(),
        state.lists.known.source.display(),
        state.lists.missing.len(),
        state.lists.missing.source.display(),
        listen_host
    );
    let shared_state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .wrap(Logger::default())
            .configure(handlers::routes)
    })
    .bind(&listen_host)?
    .run()
    .await
}
