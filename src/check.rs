//! The password age check itself, independent of where accounts and status lines come from.

use chrono::NaiveDate;
use log::debug;

use crate::account::AccountDatabase;
use crate::passwd::{parse_last_change, PasswordStatusSource};
use crate::{classify, days_since, CheckError, CheckOutcome, PerfData, ServiceState, Thresholds};

const PERFDATA_LABEL: &str = "password_age";

/// What to check: one account against one pair of thresholds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckParams {
    pub account: String,
    pub thresholds: Thresholds,
    pub perfdata: bool,
}

impl Default for CheckParams {
    fn default() -> Self {
        CheckParams {
            account: "root".to_owned(),
            thresholds: Thresholds::default(),
            perfdata: false,
        }
    }
}

pub struct PasswordAgeCheck<A, S> {
    accounts: A,
    status: S,
}

impl<A, S> PasswordAgeCheck<A, S>
where
    A: AccountDatabase,
    S: PasswordStatusSource,
{
    pub fn new(accounts: A, status: S) -> Self {
        PasswordAgeCheck { accounts, status }
    }

    /// Runs the check as of `today`.
    ///
    /// An account that does not exist yields an UNKNOWN outcome without querying its password
    /// status. Failures of the lookup, the status query or the parser are returned as errors.
    pub fn run(&self, params: &CheckParams, today: NaiveDate) -> Result<CheckOutcome, CheckError> {
        let user = &params.account;

        if !self.accounts.account_exists(user)? {
            return Ok(CheckOutcome::new(
                ServiceState::Unknown,
                format!("UNKNOWN: No user with name {user} found on system"),
            ));
        }

        let raw = self.status.query_status(user)?;
        debug!(
            "password status of {user}: {:?}",
            String::from_utf8_lossy(&raw).trim_end()
        );

        let last_change = parse_last_change(&raw)?;
        let days = days_since(today, last_change);
        debug!("{user} last changed the password on {last_change}, {days} days before {today}");

        let outcome = classify(user, days, params.thresholds);
        if !params.perfdata {
            return Ok(outcome);
        }

        let perfdata = PerfData::new(PERFDATA_LABEL, days)
            .with_thresholds(
                Some(params.thresholds.warning),
                Some(params.thresholds.critical),
            )
            .with_min(0);

        Ok(outcome.with_perfdata(perfdata))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;

    use super::*;

    struct FakeAccounts(HashSet<&'static str>);

    impl FakeAccounts {
        fn with(users: &[&'static str]) -> Self {
            FakeAccounts(users.iter().copied().collect())
        }
    }

    impl AccountDatabase for FakeAccounts {
        fn account_exists(&self, name: &str) -> Result<bool, CheckError> {
            Ok(self.0.contains(name))
        }
    }

    struct BrokenAccounts;

    impl AccountDatabase for BrokenAccounts {
        fn account_exists(&self, name: &str) -> Result<bool, CheckError> {
            Err(CheckError::AccountLookup {
                user: name.to_owned(),
                source: nix::errno::Errno::EIO,
            })
        }
    }

    /// Answers every query with the same line and counts the queries.
    struct CannedStatus {
        line: String,
        calls: Cell<usize>,
    }

    impl CannedStatus {
        fn new(line: &str) -> Self {
            CannedStatus {
                line: line.to_owned(),
                calls: Cell::new(0),
            }
        }

        fn changed_days_ago(account: &str, days: i64) -> Self {
            let date = today() - chrono::Duration::days(days);
            CannedStatus::new(&format!(
                "{account} P {} 0 99999 7 -1\n",
                date.format("%Y-%m-%d")
            ))
        }
    }

    impl PasswordStatusSource for &CannedStatus {
        fn query_status(&self, _account: &str) -> Result<Vec<u8>, CheckError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.line.as_bytes().to_vec())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn params(account: &str, warning: u32, critical: u32) -> CheckParams {
        CheckParams {
            account: account.to_owned(),
            thresholds: Thresholds::new(warning, critical),
            perfdata: false,
        }
    }

    fn run(account: &'static str, days: i64, warning: u32, critical: u32) -> CheckOutcome {
        let status = CannedStatus::changed_days_ago(account, days);
        let check = PasswordAgeCheck::new(FakeAccounts::with(&[account]), &status);
        let outcome = check
            .run(&params(account, warning, critical), today())
            .unwrap();
        assert_eq!(status.calls.get(), 1);
        outcome
    }

    #[test]
    fn test_ok() {
        let outcome = run("alice", 30, 90, 110);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(outcome.message(), "OK!");
    }

    #[test]
    fn test_warning() {
        let outcome = run("bob", 95, 90, 110);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(
            outcome.message(),
            "Warning: bob password not changed in 90 days"
        );
    }

    #[test]
    fn test_critical() {
        let outcome = run("carol", 200, 90, 110);
        assert_eq!(outcome.exit_code(), 2);
        assert_eq!(
            outcome.message(),
            "Critical: carol password not changed in 110 days"
        );
    }

    #[test]
    fn test_inverted_thresholds() {
        assert_eq!(run("dave", 60, 100, 50).state(), ServiceState::Critical);
        assert_eq!(run("dave", 40, 100, 50).state(), ServiceState::Ok);
    }

    #[test]
    fn test_missing_user_skips_status_query() {
        let status = CannedStatus::new("ghost P 2024-01-01 0 99999 7 -1\n");
        let check = PasswordAgeCheck::new(FakeAccounts::with(&["alice"]), &status);

        let outcome = check.run(&params("ghost", 90, 110), today()).unwrap();
        assert_eq!(outcome.exit_code(), 3);
        assert_eq!(
            outcome.message(),
            "UNKNOWN: No user with name ghost found on system"
        );
        assert_eq!(status.calls.get(), 0);
    }

    #[test]
    fn test_repeatable() {
        let status = CannedStatus::changed_days_ago("bob", 95);
        let check = PasswordAgeCheck::new(FakeAccounts::with(&["bob"]), &status);
        let params = params("bob", 90, 110);

        let first = check.run(&params, today()).unwrap();
        let second = check.run(&params, today()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_perfdata() {
        let status = CannedStatus::changed_days_ago("bob", 95);
        let check = PasswordAgeCheck::new(FakeAccounts::with(&["bob"]), &status);
        let params = CheckParams {
            perfdata: true,
            ..params("bob", 90, 110)
        };

        let outcome = check.run(&params, today()).unwrap();
        assert_eq!(
            &outcome.to_nagios_string(),
            "Warning: bob password not changed in 90 days | password_age=95;90;110;0"
        );
    }

    #[test]
    fn test_missing_user_has_no_perfdata() {
        let status = CannedStatus::new("");
        let check = PasswordAgeCheck::new(FakeAccounts::with(&[]), &status);
        let params = CheckParams {
            perfdata: true,
            ..params("ghost", 90, 110)
        };

        let outcome = check.run(&params, today()).unwrap();
        assert!(outcome.perfdata().is_none());
    }

    #[test]
    fn test_errors_propagate() {
        let status = CannedStatus::new("alice P garbage 0 99999 7 -1\n");
        let check = PasswordAgeCheck::new(FakeAccounts::with(&["alice"]), &status);
        let err = check.run(&params("alice", 90, 110), today()).unwrap_err();
        assert!(matches!(err, CheckError::InvalidDate { .. }));

        let status = CannedStatus::new("alice P 2024-01-01 0 99999 7 -1\n");
        let check = PasswordAgeCheck::new(BrokenAccounts, &status);
        let err = check.run(&params("alice", 90, 110), today()).unwrap_err();
        assert!(matches!(err, CheckError::AccountLookup { .. }));
        assert_eq!(status.calls.get(), 0);
    }

    #[test]
    fn test_default_params() {
        let params = CheckParams::default();
        assert_eq!(params.account, "root");
        assert_eq!(params.thresholds, Thresholds::new(90, 110));
        assert!(!params.perfdata);
    }
}
