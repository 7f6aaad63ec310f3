//! Helpers for driving the `bl` binary with scripted stdin.

use assert_cmd::Command;
use std::process::ExitStatus;

/// Captured result of one `bl` invocation.
pub struct BlOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

const ENV_VARS: [&str; 4] = [
    "BOOKLEND_CONFIG",
    "BOOKLEND_LOAN_DAYS",
    "BOOKLEND_FINE_PER_DAY",
    "BOOKLEND_ADMIN_PASSWORD",
];

/// Build a `bl` command isolated from the caller's environment.
pub fn bl_command() -> Command {
    let mut cmd = Command::cargo_bin("bl").expect("bl binary");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `bl` with `args`, feeding `stdin`; `label` names the step in failure output.
pub fn run_bl<I, S>(args: I, stdin: &str, label: &str) -> BlOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = bl_command()
        .args(args)
        .write_stdin(stdin)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run bl: {e}"));

    BlOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Join menu answers into a stdin script.
pub fn script(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}
