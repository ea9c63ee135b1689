use crate::cli::{AnalyticsScope, Cli, Command};

use clap::{CommandFactory, Parser};

#[test]
fn given_cli_definition_when_debug_asserted_then_valid() {
    Cli::command().debug_assert();
}

#[test]
fn given_no_subcommand_when_parsed_then_command_is_none() {
    let cli = Cli::try_parse_from(["shortener-dashboard"]).expect("parse");

    assert_eq!(cli.command, None);
    assert!(!cli.json);
}

#[test]
fn given_shorten_with_options_when_parsed_then_fields_set() {
    let cli = Cli::try_parse_from([
        "shortener-dashboard",
        "shorten",
        "https://example.com/long",
        "--alias",
        "promo",
        "--topic",
        "news",
        "--json",
    ])
    .expect("parse");

    assert!(cli.json, "--json is global and may follow the subcommand");
    assert_eq!(
        cli.command,
        Some(Command::Shorten {
            long_url: "https://example.com/long".to_string(),
            alias: Some("promo".to_string()),
            topic: Some("news".to_string()),
        })
    );
}

#[test]
fn given_analytics_topic_when_parsed_then_scope_is_topic() {
    let cli = Cli::try_parse_from(["shortener-dashboard", "analytics", "topic", "news"])
        .expect("parse");

    assert_eq!(
        cli.command,
        Some(Command::Analytics {
            scope: AnalyticsScope::Topic {
                topic: "news".to_string()
            }
        })
    );
}

/// **VALUE**: Verifies the report command refuses a topic and an alias together.
///
/// **WHY THIS MATTERS**: The report shows one series; accepting both would silently ignore one.
#[test]
fn given_report_with_topic_and_alias_when_parsed_then_rejected() {
    // GIVEN/WHEN: Both selectors
    let result = Cli::try_parse_from([
        "shortener-dashboard",
        "report",
        "--topic",
        "news",
        "--alias",
        "promo",
    ]);

    // THEN: Rejected by clap
    assert!(result.is_err());
}
