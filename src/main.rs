// Copyright (C) 2022-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::process::ExitCode;

use backup_exec::run;


fn main() -> ExitCode {
  run()
}
