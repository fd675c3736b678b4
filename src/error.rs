// Copyright (C) 2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;


/// The exit code reported when the script path is not configured.
pub const EXIT_CONFIGURATION_MISSING: u8 = 1;
/// The exit code reported when the interpreter could not be executed.
pub const EXIT_LAUNCH_FAILURE: u8 = 2;


/// The ways in which launching the backup script can fail.
///
/// The `Display` representation of each variant is the literal message
/// presented to the user.
#[derive(Debug)]
pub enum Error {
  /// The environment variable naming the script is unset or empty.
  ConfigurationMissing,
  /// Replacing the process image with the interpreter did not succeed.
  LaunchFailure(anyhow::Error),
}

impl Error {
  /// Retrieve the exit code the program terminates with when
  /// encountering this error.
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::ConfigurationMissing => EXIT_CONFIGURATION_MISSING,
      Self::LaunchFailure(..) => EXIT_LAUNCH_FAILURE,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let msg = match self {
      Self::ConfigurationMissing => "Missing backup script path",
      Self::LaunchFailure(..) => "Exec failed",
    };
    f.write_str(msg)
  }
}

impl StdError for Error {
  fn source(&self) -> Option<&(dyn StdError + 'static)> {
    match self {
      Self::ConfigurationMissing => None,
      Self::LaunchFailure(err) => Some(&**err),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use std::io;

  use anyhow::Context as _;


  /// Check that each error kind maps to its documented message and
  /// exit code.
  #[test]
  fn messages_and_exit_codes() {
    let err = Error::ConfigurationMissing;
    assert_eq!(err.to_string(), "Missing backup script path");
    assert_eq!(err.exit_code(), 1);
    assert!(err.source().is_none());

    let cause = Err::<(), _>(io::Error::from(io::ErrorKind::NotFound))
      .context("failed to execute `/does/not/exist script.py`")
      .unwrap_err();
    let err = Error::LaunchFailure(cause);
    assert_eq!(err.to_string(), "Exec failed");
    assert_eq!(err.exit_code(), 2);
  }

  /// Make sure that the underlying cause of a launch failure stays
  /// accessible, but does not leak into the user-visible message.
  #[test]
  fn launch_failure_source() {
    let cause = anyhow::Error::new(io::Error::from(io::ErrorKind::PermissionDenied))
      .context("failed to execute `/tmp/python3 job.py`");
    let err = Error::LaunchFailure(cause);

    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "failed to execute `/tmp/python3 job.py`");
    assert!(!err.to_string().contains("python3"));
  }
}
