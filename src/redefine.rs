// Copyright (C) 2023-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later


/// A replacement of the standard eprintln!() macro that never panics.
///
/// Write errors are ignored: a trace that cannot be emitted must not
/// alter the program's exit status.
macro_rules! eprintln {
  ($($arg:tt)*) => {{
    use std::io::Write as _;

    let _result = writeln!(::std::io::stderr(), $($arg)*);
  }};
}
