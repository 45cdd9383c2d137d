mod helpers;

use helpers::{commands_list, run_cli};

#[test]
fn help_lists_every_command() {
    let res = run_cli(&["--help"]);
    assert_eq!(res.code, 0);
    for c in commands_list() {
        assert!(res.stdout.contains(c), "help should mention `{}`:\n{}", c, res.stdout);
    }
    assert!(res.stderr.is_empty());
}

#[test]
fn version_goes_to_stdout() {
    let res = run_cli(&["--version"]);
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("twofold"));
}

#[test]
fn unknown_command_prints_usage_and_exits_2() {
    let res = run_cli(&["shuffle"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Usage: twofold <command> [options]"));
    for c in commands_list() {
        assert!(res.stderr.contains(&format!("  {}", c)));
    }
}

#[test]
fn missing_command_exits_2() {
    let res = run_cli(&[]);
    assert_eq!(res.code, 2);
}

#[test]
fn malformed_seed_is_rejected_by_parser() {
    let res = run_cli(&["replay", "--seed", "forty", "--moves", "left"]);
    assert_eq!(res.code, 2);
    assert!(res.stdout.is_empty());
}
