#![allow(dead_code)]

pub mod mock_service;

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the binary with its config directory isolated in a temp dir
pub struct CliContext {
    pub temp_dir: TempDir,
}

impl CliContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("config"))
            .expect("Failed to create config dir");
        Self { temp_dir }
    }

    /// Run with `args`, feeding `stdin` when given. Always offline.
    pub fn run(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let bin_path = env!("CARGO_BIN_EXE_student-helper");
        let mut child = Command::new(bin_path)
            .arg("--offline")
            .arg("--seed")
            .arg("7")
            .args(args)
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env("HOME", self.temp_dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn student-helper");

        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            if let Some(input) = stdin {
                pipe.write_all(input.as_bytes())
                    .expect("Failed to write stdin");
            }
        }

        child.wait_with_output().expect("Failed to wait for student-helper")
    }
}

/// A short article with clearly separate topics
pub const ARTICLE: &str = "Photosynthesis converts light energy into chemical energy inside plant cells. \
    The weather in the valley was pleasant during the spring festival. \
    Chlorophyll absorbs light energy and drives the photosynthesis reactions forward. \
    Plant cells store the chemical energy as glucose for later use.";
