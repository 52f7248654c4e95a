//! Lookups in the operating system account database.

use log::debug;
use nix::errno::Errno;
use nix::unistd::User;

use crate::CheckError;

/// Answers whether an account exists. Implemented by [SystemAccounts] and by test doubles.
pub trait AccountDatabase {
    /// Returns `Ok(false)` if there is no such account. Any other failure of the lookup is an
    /// error.
    fn account_exists(&self, name: &str) -> Result<bool, CheckError>;
}

/// The account database of the running system, queried through `getpwnam_r`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAccounts;

impl AccountDatabase for SystemAccounts {
    fn account_exists(&self, name: &str) -> Result<bool, CheckError> {
        lookup_result(name, User::from_name(name))
    }
}

/// Errors some NSS backends return from `getpwnam_r` instead of an empty result when the name
/// is unknown, see getpwnam(3).
fn is_not_found(errno: Errno) -> bool {
    matches!(
        errno,
        Errno::ENOENT | Errno::ESRCH | Errno::EBADF | Errno::EPERM
    )
}

fn lookup_result(name: &str, lookup: nix::Result<Option<User>>) -> Result<bool, CheckError> {
    match lookup {
        Ok(Some(user)) => {
            debug!("found user {} with uid {}", user.name, user.uid);
            Ok(true)
        }
        Ok(None) => {
            debug!("no user {name} in the account database");
            Ok(false)
        }
        Err(errno) if is_not_found(errno) => {
            debug!("no user {name} in the account database ({errno})");
            Ok(false)
        }
        Err(source) => Err(CheckError::AccountLookup {
            user: name.to_owned(),
            source,
        }),
    }
}
