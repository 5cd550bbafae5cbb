//! Styled terminal output for `templet-ctl`.
//!
//! Status lines go through `anstream`, which strips ANSI codes when the stream
//! is not a terminal. Rendered pages never pass through here: they are written
//! byte-for-byte to the chosen sink.

mod styles;

use std::fmt::Display;
use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{DIM, ERROR, HEADER, LABEL, SUCCESS, WARNING};

/// Print a success message (green checkmark prefix) to stderr.
pub(crate) fn success(msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{SUCCESS}✓ {msg}{SUCCESS:#}").ok();
}

/// Print an error message to stderr (red X prefix).
pub(crate) fn error(msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Print a warning message (yellow ! prefix).
pub(crate) fn warning(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

/// Print a section header.
pub(crate) fn header(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HEADER}{msg}{HEADER:#}").ok();
}

/// Print "    Label: value" with the label bolded.
pub(crate) fn label(name: impl Display, value: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "    {LABEL}{name}:{LABEL:#} {value}").ok();
}

/// Print a dimmed hint line.
pub(crate) fn hint(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{DIM}{msg}{DIM:#}").ok();
}

/// Print a bulleted list item.
pub(crate) fn item(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  • {msg}").ok();
}

/// Print a per-template status line: green checkmark or red X.
pub(crate) fn status_icon(ok: bool, msg: impl Display) {
    let mut out = anstream::stdout().lock();
    if ok {
        writeln!(out, "  {SUCCESS}✓{SUCCESS:#} {msg}").ok();
    } else {
        writeln!(out, "  {ERROR}✗{ERROR:#} {msg}").ok();
    }
}

/// Print an empty line.
pub(crate) fn blank() {
    let mut out = anstream::stdout().lock();
    writeln!(out).ok();
}
