//! Querying and parsing the password status reported by `passwd -S`.
//!
//! A status line looks like
//!
//! ```text
//! alice P 2024-01-15 0 99999 7 -1
//! ```
//!
//! with the account, the password status flag, the date of the last change, and the minimum,
//! maximum, warning and inactivity periods. Only the date is used.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use chrono::NaiveDate;
use log::debug;

use crate::CheckError;

pub const DEFAULT_PASSWD_COMMAND: &str = "/usr/bin/passwd";

const LAST_CHANGE_FIELD: usize = 2;
const LAST_CHANGE_FORMAT: &str = "%Y-%m-%d";

/// Provides the raw password status of an account.
pub trait PasswordStatusSource {
    fn query_status(&self, account: &str) -> Result<Vec<u8>, CheckError>;
}

/// Runs `<program> <account> -S` and returns its stdout.
#[derive(Clone, Debug)]
pub struct PasswdCommand {
    program: PathBuf,
}

impl PasswdCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        PasswdCommand {
            program: program.into(),
        }
    }

    fn command_line(&self, account: &str) -> String {
        format!("{} {} -S", self.program.display(), account)
    }
}

impl Default for PasswdCommand {
    fn default() -> Self {
        PasswdCommand::new(DEFAULT_PASSWD_COMMAND)
    }
}

impl PasswordStatusSource for PasswdCommand {
    fn query_status(&self, account: &str) -> Result<Vec<u8>, CheckError> {
        let command = self.command_line(account);
        debug!("running {command}");

        let output = Command::new(&self.program)
            .arg(account)
            .arg("-S")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CheckError::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(output.stdout)
    }
}

/// Extracts the date of the last password change from a raw status line.
///
/// Fields are separated by single spaces; runs of spaces are not collapsed.
pub fn parse_last_change(raw: &[u8]) -> Result<NaiveDate, CheckError> {
    let line = std::str::from_utf8(raw)?;

    let field = line
        .split(' ')
        .nth(LAST_CHANGE_FIELD)
        .ok_or_else(|| CheckError::MissingLastChange(line.trim_end().to_owned()))?;

    NaiveDate::parse_from_str(field, LAST_CHANGE_FORMAT).map_err(|source| {
        CheckError::InvalidDate {
            value: field.to_owned(),
            source,
        }
    })
}
