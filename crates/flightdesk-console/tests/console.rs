//! End-to-end runs of the `flightdesk` command line against the demo data.

use std::io::Write;

use clap::Parser;
use flightdesk_console::{run_with_catalog, Catalog, Cli, ConsoleError, Result};

// ============================================================================
// Helpers
// ============================================================================

fn run_mode(catalog: &Catalog, mode: &str, argv: &[&str]) -> Result<String> {
    let mut args = vec!["flightdesk", "--output", mode];
    args.extend_from_slice(argv);
    let cli = Cli::try_parse_from(args).expect("arguments parse");
    let mut out = Vec::new();
    run_with_catalog(catalog, cli, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

fn run(catalog: &Catalog, argv: &[&str]) -> Result<String> {
    run_mode(catalog, "text", argv)
}

fn run_json(catalog: &Catalog, argv: &[&str]) -> serde_json::Value {
    let out = run_mode(catalog, "json", argv).expect("command succeeds");
    serde_json::from_str(&out).expect("valid JSON")
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn second_page_of_orders() {
    let catalog = Catalog::demo();
    let out = run(&catalog, &["orders", "list", "--page", "2", "--size", "5"]).unwrap();
    assert!(out.starts_with("Orders (23)\n"));
    assert!(out.contains("o-1006"));
    assert!(!out.contains("o-1011"));
    assert!(out.contains("Showing 6-10 of 23"));
    assert!(out.contains("1 [2] 3 4 5"));
    assert!(out.contains("query: page=2&size=5"));
}

#[test]
fn long_lists_collapse_the_window() {
    let catalog = Catalog::demo();
    let out = run(&catalog, &["orders", "list", "--size", "2"]).unwrap();
    assert!(out.contains("[1] 2 3 4 … 12"));

    let out = run(&catalog, &["orders", "list", "--size", "2", "--page", "6"]).unwrap();
    assert!(out.contains("1 … 5 [6] 7 … 12"));
}

#[test]
fn shared_query_string_restores_the_view() {
    let catalog = Catalog::demo();
    let out = run(
        &catalog,
        &["drones", "list", "--query", "q=drag&sort=-flight_hours&size=2"],
    )
    .unwrap();

    assert!(out.starts_with("Drones (3 of 14)\n"));
    assert!(out.contains("filtered by search \"drag\""));
    let red = out.find("Red Dragon").expect("Red Dragon listed");
    let green = out.find("Green Dragon").expect("Green Dragon listed");
    assert!(red < green);
    assert!(!out.contains("Dragonfly"));
    assert!(out.contains("[1] 2"));
    assert!(out.contains("query: q=drag&sort=-flight_hours&page=1&size=2"));
}

#[test]
fn filters_and_all_sentinel() {
    let catalog = Catalog::demo();
    let json = run_json(&catalog, &["drones", "list", "-f", "status=maintenance"]);
    assert_eq!(json["pagination"]["total_items"], 2);
    assert_eq!(json["filter_summary"], "status = maintenance");

    let json = run_json(&catalog, &["drones", "list", "-f", "status=ALL"]);
    assert_eq!(json["pagination"]["total_items"], 14);
    assert!(json["filter_summary"].is_null());
}

#[test]
fn json_list_carries_pagination() {
    let catalog = Catalog::demo();
    let json = run_json(
        &catalog,
        &["badges", "list", "--filter", "enabled=true", "--size", "2"],
    );
    assert_eq!(json["resource"], "badges");
    assert_eq!(json["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["items"][0]["id"], "b-01");
    assert_eq!(json["total_count"], 6);
    assert_eq!(json["pagination"]["total_items"], 5);
    assert_eq!(json["pagination"]["total_pages"], 3);
    assert_eq!(json["query"], "enabled=true&page=1&size=2");
}

#[test]
fn no_results_is_not_an_error() {
    let catalog = Catalog::demo();
    let out = run(&catalog, &["pilots", "list", "-s", "zeppelin"]).unwrap();
    assert!(out.starts_with("Pilots (0 of 8)\n"));
    assert!(out.contains("No results found."));
}

#[test]
fn page_past_the_end_warns() {
    let catalog = Catalog::demo();
    let out = run(&catalog, &["orders", "list", "--page", "9"]).unwrap();
    assert!(out.contains("No items on page 3 of 3."));
    assert!(out.contains("Page 9 is past the last page."));
}

#[test]
fn unknown_filter_and_sort_fields_warn() {
    let catalog = Catalog::demo();
    let out = run(
        &catalog,
        &["drones", "list", "-f", "colour=red", "--sort", "wingspan"],
    )
    .unwrap();
    assert!(out.starts_with("Drones (14)\n"));
    assert!(out.contains("'colour' is not a drone filter; ignored."));
    assert!(out.contains("'wingspan' is not a drone field; sort ignored."));
}

#[test]
fn invalid_list_arguments_fail() {
    let catalog = Catalog::demo();
    let err = run(&catalog, &["orders", "list", "--size", "0"]).unwrap_err();
    assert!(matches!(err, ConsoleError::InvalidArgument(_)));

    let err = run(&catalog, &["orders", "list", "--query", "size=lots"]).unwrap_err();
    assert!(matches!(err, ConsoleError::Query(_)));
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn pilot_sees_only_their_orders() {
    let catalog = Catalog::demo();
    let out = run(&catalog, &["--as", "u-004", "orders", "list"]).unwrap();
    assert!(out.starts_with("Orders (4)\n"));
    assert!(out.contains("Showing only orders where pilot_id = p-01."));
    for id in ["o-1007", "o-1010", "o-1016", "o-1021"] {
        assert!(out.contains(id), "{id} missing");
    }
    assert!(!out.contains("o-1001"));
}

#[test]
fn pilot_filter_on_another_pilot_is_empty() {
    let catalog = Catalog::demo();
    let out = run(
        &catalog,
        &["--as", "u-004", "orders", "list", "-f", "pilot_id=p-02"],
    )
    .unwrap();
    assert!(out.contains("No results found."));
}

#[test]
fn customer_sees_only_their_bookings() {
    let catalog = Catalog::demo();
    let json = run_json(&catalog, &["--as", "u-002", "orders", "list"]);
    assert_eq!(json["pagination"]["total_items"], 7);
    let items = json["items"].as_array().expect("items array");
    assert!(items.iter().all(|order| order["customer_id"] == "u-002"));
}

#[test]
fn scope_hides_records_from_show_and_mutations() {
    let catalog = Catalog::demo();
    assert!(run(&catalog, &["--as", "u-004", "orders", "show", "o-1007"]).is_ok());

    for action in ["show", "toggle", "delete"] {
        let err = run(&catalog, &["--as", "u-004", "orders", action, "o-1001"]).unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound { .. }), "{action}");
    }
    assert!(catalog.orders.find(|o| o.id == "o-1001").is_some());
}

#[test]
fn pilot_cannot_move_a_survey_to_another_pilot() {
    let catalog = Catalog::demo();
    let err = run(
        &catalog,
        &["--as", "u-004", "surveys", "update", "s-03", "--data", r#"{"pilot_id":"p-02"}"#],
    )
    .unwrap_err();
    assert!(matches!(err, ConsoleError::InvalidArgument(_)));

    let out = run(
        &catalog,
        &["--as", "u-004", "surveys", "update", "s-03", "--data", r#"{"notes":"Glare at noon"}"#],
    )
    .unwrap();
    assert!(out.contains("Updated site survey s-03."));
}

#[test]
fn unknown_user_is_rejected() {
    let catalog = Catalog::demo();
    let err = run(&catalog, &["--as", "u-999", "dashboard"]).unwrap_err();
    assert!(matches!(err, ConsoleError::UnknownUser(id) if id == "u-999"));
}

#[test]
fn dashboard_for_a_pilot() {
    let catalog = Catalog::demo();
    let out = run(&catalog, &["--as", "u-004", "dashboard"]).unwrap();
    assert!(out.contains("signed in as Diego Alvarez (pilot)"));
    assert!(out.contains("Orders by status"));
}

// ============================================================================
// Detail and mutations
// ============================================================================

#[test]
fn order_detail_links_related_records() {
    let catalog = Catalog::demo();
    let out = run(&catalog, &["orders", "show", "o-1007"]).unwrap();
    assert!(out.starts_with("Order o-1007 for Lea Novak\n"));
    assert!(out.contains("order o-1007, paid: yes"));
    assert!(out.contains("Site Mapping (pk-mapping)"));
    assert!(out.contains("Solar Farm, Seville (a-05)"));
    assert!(out.contains("Diego Alvarez (p-01)"));
    assert!(out.contains("s-03 (completed)"));
    assert!(out.contains("flightdesk orders toggle o-1007  # toggle paid"));
    assert!(out.contains("flightdesk orders delete o-1007  # delete"));
}

#[test]
fn badge_lifecycle() {
    let catalog = Catalog::demo();
    let data = r#"{"id":"b-07","name":"Coastline","description":"Ten coastal surveys",
        "category":"skill","required_hours":60,"enabled":true}"#;

    let out = run(&catalog, &["badges", "create", "--data", data]).unwrap();
    assert!(out.contains("Created badge b-07."));

    let err = run(&catalog, &["badges", "create", "--data", data]).unwrap_err();
    assert!(matches!(err, ConsoleError::Conflict { .. }));

    let out = run(
        &catalog,
        &["badges", "update", "b-07", "--data", r#"{"name":"Coastal Ace"}"#],
    )
    .unwrap();
    assert!(out.starts_with("Coastal Ace\n"));

    let out = run(&catalog, &["badges", "toggle", "b-07"]).unwrap();
    assert!(out.contains("enabled is now off."));

    let json = run_json(&catalog, &["badges", "list", "-f", "enabled=false"]);
    assert_eq!(json["pagination"]["total_items"], 2);

    let out = run(&catalog, &["badges", "delete", "b-07"]).unwrap();
    assert!(out.contains("Deleted badge b-07."));

    let err = run(&catalog, &["badges", "show", "b-07"]).unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound { .. }));
}

#[test]
fn malformed_data_is_rejected() {
    let catalog = Catalog::demo();
    let err = run(&catalog, &["users", "create", "--data", "{not json"]).unwrap_err();
    assert!(matches!(err, ConsoleError::InvalidArgument(_)));

    let err = run(
        &catalog,
        &["users", "update", "u-002", "--data", r#"{"id":"u-200"}"#],
    )
    .unwrap_err();
    assert!(matches!(err, ConsoleError::ImmutableField(_)));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_file_sets_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_page_size: 4").unwrap();
    writeln!(file, "default_user: u-003").unwrap();
    writeln!(file, "output: json").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let catalog = Catalog::demo();
    let argv = ["flightdesk", "--config", path.as_str(), "orders", "list"];
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    run_with_catalog(&catalog, cli, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["pagination"]["page_size"], 4);
    assert_eq!(json["pagination"]["total_pages"], 6);
}

#[test]
fn invalid_config_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_window: 3").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let catalog = Catalog::demo();
    let err = run(&catalog, &["--config", path.as_str(), "dashboard"]).unwrap_err();
    assert!(matches!(err, ConsoleError::Config(_)));
}
