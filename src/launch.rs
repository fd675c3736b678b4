// Copyright (C) 2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

//! A module providing the means to replace the current process with an
//! interpreter running the configured script.

use std::os::unix::process::CommandExt as _;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use crate::config::Config;
use crate::error::Error;
use crate::util::format_command;


/// The path to the interpreter used for running scripts.
pub const INTERPRETER: &str = "/usr/bin/python3";


/// A type for launching a script by means of an interpreter.
#[derive(Clone, Debug)]
pub struct Launcher {
  /// The interpreter binary to execute.
  interpreter: PathBuf,
}

impl Launcher {
  /// Create a `Launcher` using the provided interpreter instead of the
  /// default one.
  pub fn with_interpreter<P>(interpreter: P) -> Self
  where
    P: Into<PathBuf>,
  {
    Self {
      interpreter: interpreter.into(),
    }
  }

  /// Retrieve the path to the interpreter in use.
  #[inline]
  pub fn interpreter(&self) -> &Path {
    &self.interpreter
  }

  /// Replace the current process image with the interpreter running the
  /// configured script.
  ///
  /// The interpreter receives its own path as `argv[0]` and the script
  /// path as its sole argument. The environment is inherited as is.
  /// This function only ever returns if the replacement failed.
  pub fn exec(&self, config: &Config) -> Error {
    let args = [config.script_path().as_os_str()];

    if config.trace() {
      eprintln!("{}", format_command(&self.interpreter, args));
    }

    let err = Command::new(&self.interpreter).args(args).exec();
    let err = anyhow::Error::new(err).context(format!(
      "failed to execute `{}`",
      format_command(&self.interpreter, args)
    ));

    Error::LaunchFailure(err)
  }
}

impl Default for Launcher {
  fn default() -> Self {
    Self::with_interpreter(INTERPRETER)
  }
}
