#[macro_use]
extern crate log;

#[macro_use]
extern crate derive_builder;

mod app;
mod configuration;
mod reporter;
mod suite;
mod time;

use log::LevelFilter;
use signal_hook::{iterator::Signals, SIGINT};
use std::sync::atomic::Ordering;
use std::{path::PathBuf, process::exit, thread};
use structopt::StructOpt;

use self::app::App;
use self::configuration::command_line::{LogLevel, Opt};
use self::configuration::manifest::Manifest;
use self::reporter::model::Report;

fn main() {
    let options = Opt::from_args();

    init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    );

    let manifest = match &options.file {
        Some(file) => match Manifest::from(file.clone()) {
            Ok(manifest) => manifest,
            Err(e) => {
                error!("Failed to load manifest file configuration {}", e);
                exit(2);
            }
        },
        None => Manifest::default(),
    };
    debug!("Initiated configuration {:#?}", manifest);

    let registry = match suite::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to assemble built-in suite: {}", e);
            exit(2);
        }
    };

    let report_path = options.report.clone().or_else(|| manifest.report.clone());
    let mut app = App::new(manifest, registry);

    if options.list {
        app.list_sections();
        return;
    }

    spawn_signal_handler(&app);

    if options.sections.is_empty() {
        app.run_all();
    } else {
        app.run_selected(&options.sections);
    }

    if let Some(path) = report_path {
        match Report::from_results(app.name(), app.results()) {
            Ok(report) => match reporter::save_into_file(&report, &path) {
                Ok(()) => info!("Report written to {}", path.display()),
                Err(e) => error!("Failed to write report: {}", e),
            },
            Err(e) => error!("Failed to assemble report: {}", e),
        }
    }

    exit(if app.has_failures() { 1 } else { 0 });
}

fn spawn_signal_handler(app: &App) {
    let cancel = app.cancel_flag();
    match Signals::new(&[SIGINT]) {
        Ok(signals) => {
            thread::spawn(move || {
                for sig in signals.forever() {
                    info!(
                        "Received signal {:?}, finishing the current test before stopping",
                        sig
                    );
                    cancel.store(true, Ordering::Relaxed);
                }
            });
        }
        Err(e) => warn!("Cannot install signal handler: {}", e),
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        match fern::log_file(log_file) {
            Ok(file) => dispatcher = dispatcher.chain(file),
            Err(e) => eprintln!("Cannot open log output file: {}", e),
        }
    }
    if let Err(e) = dispatcher.apply() {
        eprintln!("Cannot install logger: {}", e);
    }
    info!("Logging level {} enabled", level);
}
