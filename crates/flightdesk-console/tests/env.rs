//! Environment fallbacks for global flags.
//!
//! These tests mutate process environment, so they run serially and live in
//! their own test binary.

use std::io::Write;

use clap::Parser;
use flightdesk_console::{run_with_catalog, Catalog, Cli};
use serial_test::serial;

fn run_json(argv: &[&str]) -> serde_json::Value {
    let mut args = vec!["flightdesk", "--output", "json"];
    args.extend_from_slice(argv);
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run_with_catalog(&Catalog::demo(), cli, &mut out).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
#[serial]
fn user_from_environment() {
    std::env::set_var("FLIGHTDESK_USER", "u-004");
    let json = run_json(&["drones", "list"]);
    std::env::remove_var("FLIGHTDESK_USER");

    assert_eq!(json["pagination"]["total_items"], 2);
    assert_eq!(json["items"][0]["id"], "d-01");
    assert_eq!(json["items"][1]["id"], "d-04");
}

#[test]
#[serial]
fn flag_beats_environment() {
    std::env::set_var("FLIGHTDESK_USER", "u-004");
    let json = run_json(&["--as", "u-001", "drones", "list"]);
    std::env::remove_var("FLIGHTDESK_USER");

    assert_eq!(json["pagination"]["total_items"], 14);
}

#[test]
#[serial]
fn config_from_environment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_page_size: 3").unwrap();
    std::env::set_var("FLIGHTDESK_CONFIG", file.path());
    let json = run_json(&["pilots", "list"]);
    std::env::remove_var("FLIGHTDESK_CONFIG");

    assert_eq!(json["pagination"]["page_size"], 3);
    assert_eq!(json["pagination"]["total_pages"], 3);
}
