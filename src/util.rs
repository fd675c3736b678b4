// Copyright (C) 2022-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::OsStr;
use std::ops::Deref as _;


/// Format a command with the given list of arguments as a string.
pub fn format_command<C, A, S>(command: C, args: A) -> String
where
  C: AsRef<OsStr>,
  A: IntoIterator<Item = S>,
  S: AsRef<OsStr>,
{
  args.into_iter().fold(
    command.as_ref().to_string_lossy().into_owned(),
    |mut cmd, arg| {
      cmd += " ";
      cmd += arg.as_ref().to_string_lossy().deref();
      cmd
    },
  )
}


#[cfg(test)]
mod tests {
  use super::*;

  use std::os::unix::ffi::OsStrExt as _;


  /// Check that commands are formatted as expected.
  #[test]
  fn command_formatting() {
    assert_eq!(format_command("python3", [""; 0]), "python3");
    assert_eq!(
      format_command("/usr/bin/python3", ["/opt/jobs/nightly_backup.py"]),
      "/usr/bin/python3 /opt/jobs/nightly_backup.py"
    );

    let arg = OsStr::from_bytes(b"back\xffup.py");
    assert_eq!(
      format_command("/usr/bin/python3", [arg]),
      "/usr/bin/python3 back\u{fffd}up.py"
    );
  }
}
