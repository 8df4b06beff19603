//! CLI argument parsing tests

use clap::Parser;
use containerkit::app::cli::args::*;
use std::path::PathBuf;

#[test]
fn test_no_arguments_is_an_error() {
    let result = Args::try_parse_from(["containerkit"]);
    assert!(result.is_err());
}

#[test]
fn test_stress_with_all_options() {
    let args = Args::try_parse_from([
        "containerkit",
        "stress",
        "--container",
        "heap",
        "-t",
        "4",
        "-n",
        "250",
        "--json",
    ])
    .unwrap();

    assert_eq!(
        args.command,
        Some(Command::Stress {
            container: Some(ContainerKind::Heap),
            threads: Some(4),
            items_per_thread: Some(250),
            json: true,
        })
    );
}

#[test]
fn test_stress_options_default_to_unset() {
    let args = Args::try_parse_from(["containerkit", "stress"]).unwrap();

    match args.command {
        Some(Command::Stress {
            container,
            threads,
            items_per_thread,
            json,
        }) => {
            assert_eq!(container, None);
            assert_eq!(threads, None);
            assert_eq!(items_per_thread, None);
            assert!(!json);
        }
        other => panic!("Expected stress command, got {:?}", other),
    }
}

#[test]
fn test_unknown_container_kind_is_rejected() {
    let result = Args::try_parse_from(["containerkit", "stress", "--container", "tree"]);
    assert!(result.is_err());
}

#[test]
fn test_backpressure_defaults() {
    let args = Args::try_parse_from(["containerkit", "backpressure"]).unwrap();

    assert_eq!(
        args.command,
        Some(Command::Backpressure {
            capacity: None,
            items: 1000,
            timeout_ms: None,
            consumer_delay_us: 0,
            json: false,
        })
    );
}

#[test]
fn test_backpressure_with_options() {
    let args = Args::try_parse_from([
        "containerkit",
        "backpressure",
        "--capacity",
        "3",
        "-n",
        "50",
        "--timeout-ms",
        "200",
        "--consumer-delay-us",
        "10",
    ])
    .unwrap();

    assert_eq!(
        args.command,
        Some(Command::Backpressure {
            capacity: Some(3),
            items: 50,
            timeout_ms: Some(200),
            consumer_delay_us: 10,
            json: false,
        })
    );
}

#[test]
fn test_heap_sort_accepts_negative_numbers() {
    let args =
        Args::try_parse_from(["containerkit", "heap-sort", "100", "1145", "-202", "5"]).unwrap();

    assert_eq!(
        args.command,
        Some(Command::HeapSort {
            reverse: false,
            values: vec![100, 1145, -202, 5],
        })
    );
}

#[test]
fn test_heap_sort_requires_values() {
    assert!(Args::try_parse_from(["containerkit", "heap-sort"]).is_err());
    assert!(Args::try_parse_from(["containerkit", "heap-sort", "-r"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = Args::try_parse_from([
        "containerkit",
        "heap-sort",
        "3",
        "1",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--log-file",
        "run.log",
    ])
    .unwrap();

    assert_eq!(args.log_level, Some("debug".to_string()));
    assert_eq!(args.log_format, Some("json".to_string()));
    assert_eq!(args.log_file, Some(PathBuf::from("run.log")));
    assert_eq!(args.effective_log_file(), Some("run.log"));
}

#[test]
fn test_log_file_none_disables_file_logging() {
    let args =
        Args::try_parse_from(["containerkit", "-f", "none", "heap-sort", "1"]).unwrap();
    assert_eq!(args.effective_log_file(), None);

    let args = Args::try_parse_from(["containerkit", "-f", "-", "heap-sort", "1"]).unwrap();
    assert_eq!(args.effective_log_file(), None);
}

#[test]
fn test_value_parser_rejects_unknown_log_level() {
    let result = Args::try_parse_from(["containerkit", "-l", "verbose", "stress"]);
    assert!(result.is_err());
}

#[test]
fn test_value_parser_rejects_unknown_log_format() {
    let result = Args::try_parse_from(["containerkit", "-o", "yaml", "stress"]);
    assert!(result.is_err());
}

#[test]
fn test_color_flags_conflict() {
    let result = Args::try_parse_from(["containerkit", "--color", "--no-color", "stress"]);
    assert!(result.is_err());

    let args = Args::try_parse_from(["containerkit", "--no-color", "stress"]).unwrap();
    assert!(!args.use_color());

    let args = Args::try_parse_from(["containerkit", "-g", "stress"]).unwrap();
    assert!(args.use_color());
}

#[test]
fn test_container_kind_display_matches_value_names() {
    assert_eq!(ContainerKind::Queue.to_string(), "queue");
    assert_eq!(ContainerKind::Heap.to_string(), "heap");

    for kind in ["queue", "stack", "list", "set", "heap"] {
        let args = Args::try_parse_from(["containerkit", "stress", "-k", kind]).unwrap();
        match args.command {
            Some(Command::Stress {
                container: Some(parsed),
                ..
            }) => assert_eq!(parsed.to_string(), kind),
            other => panic!("Expected stress command, got {:?}", other),
        }
    }
}
