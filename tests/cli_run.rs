mod common;

use common::{magnascale, visited};
use tempfile::tempdir;

#[test]
fn back_out_of_submenu_and_root_exits_cleanly() {
    let dir = tempdir().unwrap();

    // cluster has three entries, so 4 is its Back; the root's Back is 3.
    let run = magnascale(dir.path(), &[], "1\n4\n3\n", &[]);

    assert!(run.status_ok, "stderr:\n{}", run.stderr);
    assert_eq!(visited(&run.stdout), vec!["Main", "Main > cluster", "Main"]);
    assert!(run.stdout.contains("1. maintenance-mode\n2. refresh\n3. power-off\n4. Back\n"));
}

#[test]
fn run_subcommand_is_the_default() {
    let dir = tempdir().unwrap();

    let run = magnascale(dir.path(), &["run"], "3\n", &[]);

    assert!(run.status_ok);
    assert_eq!(visited(&run.stdout), vec!["Main"]);
}

#[test]
fn node_power_off_targets_the_chosen_node() {
    let dir = tempdir().unwrap();

    let run = magnascale(dir.path(), &[], "2\n1\n2\n4\n3\n3\n", &[]);

    assert!(run.status_ok, "stderr:\n{}", run.stderr);
    assert!(run.stdout.contains("Requested power off for node2."));
    assert!(!run.stdout.contains("for node1."));
    assert_eq!(
        visited(&run.stdout),
        vec![
            "Main",
            "Main > node",
            "Main > node > power-off",
            "Main > node > power-off",
            "Main > node",
            "Main",
        ]
    );
}

#[test]
fn nodes_come_from_environment() {
    let dir = tempdir().unwrap();

    let run = magnascale(
        dir.path(),
        &[],
        "2\n1\n",
        &[("MAGNASCALE_NODES", "alpha, beta")],
    );

    assert!(run.status_ok);
    assert!(run.stdout.contains("1. alpha\n2. beta\n3. Back\n"));
}

#[test]
fn invalid_choices_are_reported_and_menu_repeats() {
    let dir = tempdir().unwrap();

    let run = magnascale(dir.path(), &[], "abc\n7\n3\n", &[]);

    assert!(run.status_ok);
    assert!(run.stdout.contains("Invalid input. Please enter a number."));
    assert!(run.stdout.contains("Invalid choice. Please try again."));
    assert_eq!(visited(&run.stdout), vec!["Main", "Main", "Main"]);
}

#[test]
fn end_of_input_ends_session_without_error() {
    let dir = tempdir().unwrap();

    let run = magnascale(dir.path(), &[], "1\n", &[]);

    assert!(run.status_ok);
    assert_eq!(visited(&run.stdout), vec!["Main", "Main > cluster"]);
}

#[cfg(unix)]
#[test]
fn shell_escape_runs_commands_and_returns_to_root() {
    let dir = tempdir().unwrap();

    let run = magnascale(
        dir.path(),
        &[],
        "99\necho hi\necho oops >&2\nexit\n3\n",
        &[],
    );

    assert!(run.status_ok, "stderr:\n{}", run.stderr);
    assert!(run.stdout.contains("Entering Bash command environment."));
    assert!(run.stdout.contains("hi\n"));
    assert!(run.stdout.contains("oops\n"));
    assert!(run.stdout.contains("Exiting Bash environment and returning to the main menu."));
    assert_eq!(visited(&run.stdout), vec!["Main", "Main"]);
}

#[test]
fn shell_shortcut_is_not_listed_and_not_available_below_root() {
    let dir = tempdir().unwrap();

    let run = magnascale(dir.path(), &[], "1\n99\n4\n3\n", &[]);

    assert!(run.status_ok);
    assert!(!run.stdout.contains("99."));
    assert!(!run.stdout.contains("Entering Bash"));
    assert!(run.stdout.contains("Invalid choice. Please try again."));
}

#[test]
fn project_config_sets_root_name() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("magnascale.toml"),
        "[menu]\nroot_name = \"Fleet\"\n\n[fleet]\nnodes = [\"db1\"]\n",
    )
    .unwrap();

    let run = magnascale(dir.path(), &[], "2\n1\n", &[]);

    assert!(run.status_ok);
    assert_eq!(
        visited(&run.stdout),
        vec!["Fleet", "Fleet > node", "Fleet > node > power-off"]
    );
    assert!(run.stdout.contains("1. db1\n2. Back\n"));
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("magnascale.toml"), "[fleet]\nnode = [\"x\"]\n").unwrap();

    let run = magnascale(dir.path(), &[], "3\n", &[]);

    assert!(run.status_ok);
    assert!(run.stderr.contains("Unknown config key 'node'"));
    assert!(run.stderr.contains("Did you mean 'nodes'?"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempdir().unwrap();

    let run = magnascale(dir.path(), &["--config", "nope.toml"], "", &[]);

    assert!(!run.status_ok);
    assert!(run.stderr.contains("invalid configuration in nope.toml"));
}
