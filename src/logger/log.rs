use std::io::{self, Write};

use crate::error::LogbookError;
use crate::logger::prefix::{prefixes, PrefixTable};
use crate::logger::severity::Severity;

/// Builds the line logged for `message`, without the line terminator.
/// Returns `None` when `severity` has no entry in `table`.
pub fn format_line_with(table: &PrefixTable, message: &str, severity: Severity) -> Option<String> {
    table
        .get(&severity)
        .map(|prefix| format!("{}{}", prefix, message))
}

/// [`format_line_with`] over the process-wide prefix table.
pub fn format_line(message: &str, severity: Severity) -> Option<String> {
    format_line_with(prefixes(), message, severity)
}

/// Writes one line prefixed from `table` to `out` and flushes it.
///
/// Returns `Ok(false)` without touching `out` when `severity` has no entry.
pub fn write_line<W: Write>(
    table: &PrefixTable,
    out: &mut W,
    message: &str,
    severity: Severity,
) -> Result<bool, LogbookError> {
    let Some(line) = format_line_with(table, message, severity) else {
        return Ok(false);
    };

    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(true)
}

/// [`write_line`] over the process-wide prefix table.
pub fn log_to<W: Write>(
    out: &mut W,
    message: &str,
    severity: Severity,
) -> Result<bool, LogbookError> {
    write_line(prefixes(), out, message, severity)
}

/// Logs `message` to stdout with the prefix of `severity`.
/// Never fails: a missing prefix or a stdout error produces no output.
pub fn log(message: &str, severity: Severity) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = log_to(&mut handle, message, severity);
}
