use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// Writes `source` to a temporary file and runs the built `lox` binary
/// against it with the given subcommand, capturing stdout/stderr/exit
/// code.
pub fn lox(subcommand: &str, source: &str) -> Run {
    let mut file = NamedTempFile::new().expect("failed to create a temp source file");
    file.write_all(source.as_bytes())
        .expect("failed to write the temp source file");

    let output = Command::new(env!("CARGO_BIN_EXE_lox"))
        .arg(subcommand)
        .arg(file.path())
        .output()
        .expect("failed to run the lox binary");

    Run {
        stdout: String::from_utf8(output.stdout).expect("stdout was not utf8"),
        stderr: String::from_utf8(output.stderr).expect("stderr was not utf8"),
        code: output.status.code().unwrap_or(-1),
    }
}
