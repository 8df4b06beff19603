//! Application startup: arguments, configuration, logging, then the command

use super::cli::api::{
    Args, Command, ContainerKind, DEFAULT_CAPACITY, DEFAULT_ITEMS_PER_THREAD, DEFAULT_THREADS,
};
use super::commands::backpressure::{self, BackpressureSettings};
use super::commands::{heap_sort, stress};
use crate::containers::api::{CancelSignal, Canceller};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::version::long_version;
use clap::Parser;
use serde::Serialize;
use std::time::Duration;
use strum::IntoEnumIterator;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_CANCELLED: i32 = 130;

/// Run the binary and return its exit code
pub fn startup() -> i32 {
    let mut args = Args::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start the async runtime: {}", e);
            return EXIT_FAILED;
        }
    };

    // Logging is not up yet, so configuration problems go straight to stderr
    match runtime.block_on(args.load_config_file()) {
        Ok(Some(config)) => {
            if let Err(e) = Args::apply_toml_values(&mut args, &config) {
                eprintln!("Error in configuration file: {}", e);
                return EXIT_CONFIG;
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_CONFIG;
        }
    }

    let use_color = args.use_color();
    colored::control::set_override(use_color);
    let log_level = args.log_level.as_deref().map(str::to_ascii_lowercase);
    if let Err(e) = init_logging(
        log_level.as_deref(),
        args.log_format.as_deref(),
        args.effective_log_file(),
        use_color,
    ) {
        eprintln!("Error: failed to initialise logging: {}", e);
        return EXIT_FAILED;
    }
    log::info!("containerkit {} starting", long_version());

    if let Err(e) = args.validate() {
        log_error_with_context(&e, "Validating arguments");
        return EXIT_CONFIG;
    }

    let Some(command) = args.command.clone() else {
        log::error!("no command given");
        return EXIT_CONFIG;
    };
    log::debug!("Final arguments: {:#?}", args);

    let canceller = Canceller::new();
    {
        let _guard = runtime.enter();
        canceller.on_ctrl_c();
    }

    let exit_code = match command {
        Command::Stress {
            container,
            threads,
            items_per_thread,
            json,
        } => run_stress(
            container,
            threads.unwrap_or(DEFAULT_THREADS),
            items_per_thread.unwrap_or(DEFAULT_ITEMS_PER_THREAD),
            json,
            &canceller.signal(),
        ),
        Command::Backpressure {
            capacity,
            items,
            timeout_ms,
            consumer_delay_us,
            json,
        } => {
            let settings = BackpressureSettings {
                capacity: capacity.unwrap_or(DEFAULT_CAPACITY),
                items,
                timeout: timeout_ms.map(Duration::from_millis),
                consumer_delay: Duration::from_micros(consumer_delay_us),
            };
            let report = runtime.block_on(backpressure::run(settings, &canceller.signal()));
            emit(&report, json);
            outcome(report.passed, report.cancelled)
        }
        Command::HeapSort { values, reverse } => {
            let sorted = heap_sort::run(&values, reverse);
            let joined: Vec<String> = sorted.iter().map(i64::to_string).collect();
            println!("{}", joined.join(","));
            EXIT_OK
        }
    };

    log::info!("containerkit finished with exit code {}", exit_code);
    exit_code
}

fn run_stress(
    container: Option<ContainerKind>,
    threads: usize,
    items_per_thread: usize,
    json: bool,
    signal: &CancelSignal,
) -> i32 {
    let kinds: Vec<ContainerKind> = match container {
        Some(kind) => vec![kind],
        None => ContainerKind::iter().collect(),
    };

    let mut reports = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if signal.is_cancelled() {
            break;
        }
        let report = stress::run(kind, threads, items_per_thread, signal);
        if !json {
            println!("{}", report);
        }
        reports.push(report);
    }
    if json {
        print_json(&reports);
    }

    let cancelled = signal.is_cancelled();
    outcome(reports.iter().all(|report| report.passed), cancelled)
}

fn emit<R: Serialize + std::fmt::Display>(report: &R, json: bool) {
    if json {
        print_json(report);
    } else {
        println!("{}", report);
    }
}

fn print_json<R: Serialize + ?Sized>(report: &R) {
    match serde_json::to_string_pretty(report) {
        Ok(text) => println!("{}", text),
        Err(e) => log::error!("failed to serialize report: {}", e),
    }
}

fn outcome(passed: bool, cancelled: bool) -> i32 {
    if cancelled {
        EXIT_CANCELLED
    } else if passed {
        EXIT_OK
    } else {
        EXIT_FAILED
    }
}
