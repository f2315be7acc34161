#![cfg(unix)]

use std::process::Command;

fn fake_tfd(body: &str) -> tempfile::TempDir {
    let home = tempfile::tempdir().unwrap();
    let downward = home.path().join("downward");
    std::fs::create_dir(&downward).unwrap();
    std::fs::write(downward.join("plan"), format!("#!/bin/bash\n{body}\n")).unwrap();
    home
}

fn tfd_plan(home: Option<&std::path::Path>, args: &[&str]) -> i32 {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tfd-plan"));
    cmd.args(args).env_remove("TFD_HOME").env("TFD_SHELL", "/bin/bash");
    if let Some(home) = home {
        cmd.env("TFD_HOME", home);
    }
    cmd.status().unwrap().code().unwrap()
}

#[test]
fn exit_codes_are_propagated() {
    for code in [0, 1, 5] {
        let home = fake_tfd(&format!("exit {code}"));
        assert_eq!(tfd_plan(Some(home.path()), &["d", "p", "o"]), code);
    }
}

#[test]
fn relative_paths_survive_the_directory_change() {
    let home = fake_tfd("echo '(noop)' > \"$3\"");
    let work = tempfile::tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_tfd-plan"))
        .args(["d.pddl", "p.pddl", "plan.txt"])
        .current_dir(work.path())
        .env("TFD_HOME", home.path())
        .env("TFD_SHELL", "/bin/bash")
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(0));
    let plan = std::fs::read_to_string(work.path().join("plan.txt")).unwrap();
    assert_eq!(plan, "(noop)\n");
}

#[test]
fn usage_and_setup_failures() {
    assert_eq!(tfd_plan(None, &["only-one"]), tfd_runner::USAGE_EXIT_CODE);
    assert_eq!(tfd_plan(None, &["d", "p", "o"]), tfd_runner::SETUP_EXIT_CODE);

    let empty = tempfile::tempdir().unwrap();
    assert_eq!(
        tfd_plan(Some(empty.path()), &["d", "p", "o"]),
        tfd_runner::SETUP_EXIT_CODE
    );
}
