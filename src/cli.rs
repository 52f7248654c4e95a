//! Command line arguments of the `check_password_age` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::passwd::DEFAULT_PASSWD_COMMAND;
use crate::{CheckParams, Thresholds};

/// Exit code for invalid command lines, `EX_USAGE` from sysexits.h. Kept apart from the four
/// plugin states so a broken invocation can't be mistaken for a check result.
pub const EXIT_USAGE: i32 = 64;

/// Exit code when the Icinga command definition can't be generated, `EX_SOFTWARE`.
pub const EXIT_SOFTWARE: i32 = 70;

/// Check the last time a user changed their password
#[derive(Debug, Parser)]
#[command(name = "check_password_age", version)]
pub struct Cli {
    /// Account whose password age is checked
    #[arg(short, long, default_value = "root")]
    pub user: String,

    /// Days since the last change after which the check is WARNING
    #[arg(short, long, default_value_t = 90)]
    pub warning: u32,

    /// Days since the last change after which the check is CRITICAL
    #[arg(short, long, default_value_t = 110)]
    pub critical: u32,

    /// Append performance data to the plugin output
    #[arg(long)]
    pub perfdata: bool,

    /// Utility printing the password status of an account when called as `<cmd> <user> -S`
    #[arg(long, default_value = DEFAULT_PASSWD_COMMAND)]
    pub passwd_command: PathBuf,

    /// Log more to stderr, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.warning, self.critical)
    }

    pub fn params(&self) -> CheckParams {
        CheckParams {
            account: self.user.clone(),
            thresholds: self.thresholds(),
            perfdata: self.perfdata,
        }
    }
}
