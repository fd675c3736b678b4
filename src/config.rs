// Copyright (C) 2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration of the launcher, as sourced from the environment.

use std::env::var_os;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;


/// The environment variable naming the backup script to run.
pub const SCRIPT_PATH_VAR: &str = "BACKUP_SCRIPT_PATH";
/// The environment variable enabling tracing of the interpreter
/// command on stderr.
pub const TRACE_VAR: &str = "BACKUP_EXEC_TRACE";


/// Check whether an environment variable value counts as "set".
fn is_set(value: Option<&OsString>) -> bool {
  value.map(|value| !value.is_empty()).unwrap_or(false)
}


/// The launcher's configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  /// The path to the script to hand to the interpreter.
  script_path: PathBuf,
  /// Whether to print the command about to be executed.
  trace: bool,
}

impl Config {
  /// Load the configuration from the process' environment.
  ///
  /// Each variable is read exactly once.
  pub fn from_env() -> Result<Self, Error> {
    Self::from_vars(var_os(SCRIPT_PATH_VAR), var_os(TRACE_VAR))
  }

  /// Create a configuration from the raw values of the relevant
  /// environment variables.
  ///
  /// An empty script path is treated the same as an absent one. No
  /// checks are performed on the path itself.
  pub fn from_vars(script: Option<OsString>, trace: Option<OsString>) -> Result<Self, Error> {
    let script = script
      .filter(|script| !script.is_empty())
      .ok_or(Error::ConfigurationMissing)?;

    let slf = Self {
      script_path: PathBuf::from(script),
      trace: is_set(trace.as_ref()),
    };
    Ok(slf)
  }

  /// Retrieve the path to the configured script.
  #[inline]
  pub fn script_path(&self) -> &Path {
    &self.script_path
  }

  /// Check whether command tracing was requested.
  #[inline]
  pub fn trace(&self) -> bool {
    self.trace
  }
}
