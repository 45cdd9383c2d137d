//! Shared helpers for CLI integration tests.
//!
//! - [`run_cli`] calls the library entry point with in-memory streams.
//! - [`run_binary`] spawns the built `twofold` binary with extra environment
//!   variables and optional stdin, for behavior that depends on the process
//!   environment.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let argv = std::iter::once("twofold").chain(args.iter().copied());
    let code = twofold_cli::run(argv, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub fn run_binary(args: &[&str], env: &[(&str, &str)], stdin: Option<&str>) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_twofold"));
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for key in [
        "TWOFOLD_CONFIG",
        "TWOFOLD_SEED",
        "TWOFOLD_STRATEGY",
        "TWOFOLD_GAMES",
        "TWOFOLD_MAX_MOVES",
        "TWOFOLD_SIM_BREAK_AFTER",
        "TWOFOLD_LOG",
        "TWOFOLD_LOG_FORMAT",
    ] {
        cmd.env_remove(key);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().expect("spawn twofold binary");
    {
        let mut child_stdin = child.stdin.take().expect("child stdin");
        if let Some(input) = stdin {
            child_stdin
                .write_all(input.as_bytes())
                .expect("write child stdin");
        }
    }
    let output = child.wait_with_output().expect("wait for twofold binary");
    CliOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

pub fn commands_list() -> &'static [&'static str] {
    &["play", "sim", "replay", "cfg"]
}
