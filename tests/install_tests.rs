//! Install and bootstrap through the binary with fake tools on PATH

#![cfg(unix)]

mod common;

use common::{TestWorkspace, melodrama_cmd_for_workspace};
use predicates::prelude::*;

#[test]
fn test_installs_with_yarn_then_bootstraps() {
    let workspace = TestWorkspace::new();
    workspace.fake_package_manager("yarn", 0);
    workspace.fake_package_manager("npm", 0);
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installation complete!"))
        .stdout(predicate::str::contains("Your presentation is ready in"));

    let project = common::project_path(&workspace, "demo");
    let entry = project.join("node_modules/melodrama-scripts/index.js");
    assert_eq!(
        workspace.calls(),
        vec![
            "yarn add --dev --exact melodrama-scripts".to_string(),
            format!("node {} {} false", entry.display(), project.display()),
        ]
    );
}

#[test]
fn test_spawns_the_resolved_tool_paths() {
    let workspace = TestWorkspace::new();
    workspace.fake_tool(
        "yarn",
        "echo \"$0\" >> \"$MELODRAMA_TEST_CALL_LOG\"\n\
         /bin/mkdir -p node_modules/melodrama-scripts\n\
         echo 'module.exports = () => {};' > node_modules/melodrama-scripts/index.js",
    );
    workspace.fake_tool("node", "echo \"$0\" >> \"$MELODRAMA_TEST_CALL_LOG\"");

    melodrama_cmd_for_workspace(&workspace)
        .arg("demo")
        .assert()
        .success();

    let bin = workspace.bin_dir();
    assert_eq!(
        workspace.calls(),
        vec![
            bin.join("yarn").display().to_string(),
            bin.join("node").display().to_string(),
        ]
    );
}

#[test]
fn test_falls_back_to_npm() {
    let workspace = TestWorkspace::new();
    workspace.fake_package_manager("npm", 0);
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .arg("demo")
        .assert()
        .success();

    let calls = workspace.calls();
    assert_eq!(calls[0], "npm install --DE melodrama-scripts");
    assert!(calls[1].ends_with(" false"));
}

#[test]
fn test_npm_verbose_passes_flag_and_forwards_output() {
    let workspace = TestWorkspace::new();
    workspace.fake_tool(
        "npm",
        "echo \"npm $*\" >> \"$MELODRAMA_TEST_CALL_LOG\"\necho fetching packages\n\
         /bin/mkdir -p node_modules/melodrama-scripts\n\
         echo 'module.exports = () => {};' > node_modules/melodrama-scripts/index.js",
    );
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .args(["demo", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fetching packages"));

    let calls = workspace.calls();
    assert_eq!(calls[0], "npm install --DE --verbose melodrama-scripts");
    assert!(calls[1].ends_with(" true"));
}

#[test]
fn test_yarn_never_gets_verbose_flag() {
    let workspace = TestWorkspace::new();
    workspace.fake_package_manager("yarn", 0);
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .args(["demo", "--verbose"])
        .assert()
        .success();

    assert_eq!(workspace.calls()[0], "yarn add --dev --exact melodrama-scripts");
}

#[test]
fn test_install_failure_skips_bootstrap() {
    let workspace = TestWorkspace::new();
    workspace.fake_package_manager("yarn", 3);
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .arg("demo")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exit code 3"));

    let calls = workspace.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("yarn "));
    assert!(workspace.file_exists("demo/package.json"));
}

#[test]
fn test_bootstrap_failure_is_reported() {
    let workspace = TestWorkspace::new();
    workspace.fake_package_manager("yarn", 0);
    workspace.fake_node(1);

    melodrama_cmd_for_workspace(&workspace)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bootstrap of melodrama-scripts failed"))
        .stderr(predicate::str::contains("exit code 1"));
}

#[test]
fn test_missing_entry_point_is_reported() {
    let workspace = TestWorkspace::new();
    workspace.fake_tool("yarn", "exit 0");
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bootstrap of melodrama-scripts failed"))
        .stderr(predicate::str::contains("entry point not found"));
}

#[test]
fn test_no_bootstrap_stops_after_install() {
    let workspace = TestWorkspace::new();
    workspace.fake_package_manager("yarn", 0);
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .args(["demo", "--no-bootstrap"])
        .assert()
        .success();

    assert_eq!(workspace.calls(), vec!["yarn add --dev --exact melodrama-scripts"]);
}

#[test]
fn test_spectacle_preset_with_extras() {
    let workspace = TestWorkspace::new();
    workspace.fake_package_manager("yarn", 0);
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .args(["deck", "--preset", "spectacle", "--syntax", "--theme", "nova"])
        .assert()
        .success();

    assert_eq!(
        workspace.calls(),
        vec!["yarn add --dev --exact react react-dom spectacle prismjs spectacle-theme-nova"]
    );
}

#[test]
fn test_skip_install_spawns_nothing() {
    let workspace = TestWorkspace::new();
    workspace.fake_package_manager("yarn", 0);
    workspace.fake_node(0);

    melodrama_cmd_for_workspace(&workspace)
        .args(["demo", "--skip-install"])
        .assert()
        .success();

    assert!(workspace.calls().is_empty());
}

#[test]
fn test_install_timeout_kills_package_manager() {
    let workspace = TestWorkspace::new();
    workspace.fake_tool("yarn", "exec /bin/sleep 30");

    melodrama_cmd_for_workspace(&workspace)
        .args(["demo", "--install-timeout", "1"])
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .failure()
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn test_install_timeout_from_environment() {
    let workspace = TestWorkspace::new();
    workspace.fake_tool("yarn", "exec /bin/sleep 30");

    melodrama_cmd_for_workspace(&workspace)
        .arg("demo")
        .env("MELODRAMA_INSTALL_TIMEOUT", "1")
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .failure()
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn test_missing_package_managers() {
    let workspace = TestWorkspace::new();
    workspace.create_dir(".bin");

    melodrama_cmd_for_workspace(&workspace)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("npm"));

    assert!(workspace.file_exists("demo/package.json"));
}
