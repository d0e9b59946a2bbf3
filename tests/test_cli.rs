use clap::Parser;

use torque::cli::{Cli, Command};
use torque::model::StrategyKind;

fn history_args(days: &str) -> Vec<&str> {
    vec![
        "torque",
        "history",
        "--base-yield",
        "0",
        "--leverage",
        "-1",
        "--borrow-rate",
        "3.2",
        "--kind",
        "short",
        "--days",
        days,
    ]
}

#[test]
fn test_history_days_within_cap() {
    let cli = Cli::try_parse_from(history_args("3650")).unwrap();
    match cli.command {
        Command::History { position, days, .. } => {
            assert_eq!(days, Some(3650));
            assert_eq!(position.leverage, -1.0);
            assert_eq!(position.kind, StrategyKind::Short);
        }
        _ => panic!("expected history command"),
    }
}

#[test]
fn test_history_days_over_cap_rejected() {
    assert!(Cli::try_parse_from(history_args("3651")).is_err());
    assert!(Cli::try_parse_from(history_args("4294967295")).is_err());
}

#[test]
fn test_unknown_kind_rejected() {
    let args = [
        "torque",
        "calculate",
        "--base-yield",
        "5",
        "--leverage",
        "2",
        "--borrow-rate",
        "3",
        "--kind",
        "moon",
    ];
    assert!(Cli::try_parse_from(args).is_err());
}
