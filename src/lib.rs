// Copyright (C) 2022-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

//! A launcher that replaces itself with a Python interpreter running
//! the backup script named by the `BACKUP_SCRIPT_PATH` environment
//! variable.

#![allow(clippy::let_and_return, clippy::let_unit_value)]

#[macro_use]
mod redefine;

mod config;
mod error;
mod launch;
mod util;

use std::io::stdout;
use std::io::Write;
use std::process::ExitCode;

pub use crate::config::Config;
pub use crate::config::SCRIPT_PATH_VAR;
pub use crate::config::TRACE_VAR;
pub use crate::error::Error;
pub use crate::error::EXIT_CONFIGURATION_MISSING;
pub use crate::error::EXIT_LAUNCH_FAILURE;
pub use crate::launch::Launcher;
pub use crate::launch::INTERPRETER;


/// Load the configuration and hand over control to the interpreter.
///
/// On success this function never returns, because the current process
/// is replaced. Hence, the only thing it can ever produce is an error.
pub fn launch(launcher: &Launcher) -> Error {
  match Config::from_env() {
    Ok(config) => launcher.exec(&config),
    Err(err) => err,
  }
}


/// Print the diagnostic for `err` and map it to an exit code.
///
/// Failure to write the diagnostic is ignored, so that the exit code is
/// always the one associated with the error.
fn report<W>(err: &Error, out: &mut W) -> ExitCode
where
  W: Write,
{
  let _result = writeln!(out, "{err}");
  ExitCode::from(err.exit_code())
}


/// Run the program using the provided launcher and report errors, if
/// any, on stdout.
pub fn run_with(launcher: &Launcher) -> ExitCode {
  let err = launch(launcher);
  report(&err, &mut stdout())
}


/// Run the program and report errors, if any.
///
/// Program arguments are not consulted.
pub fn run() -> ExitCode {
  run_with(&Launcher::default())
}
