use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE: &str = "5 5\n1 2 2\n1 3 4\n2 3 1\n2 4 7\n3 5 3\n";

/// A graphwalk command isolated from any user or working-directory config
pub fn graphwalk(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.current_dir(dir)
        .env("GRAPHWALK_CONFIG_DIR", dir.join("user-config"))
        .env_remove("GRAPHWALK_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG");
    cmd
}

pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write graph file");
    path
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}
