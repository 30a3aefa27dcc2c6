pub mod log;
pub mod prefix;
pub mod severity;

pub use log::{format_line, format_line_with, log, log_to, write_line};
pub use prefix::{prefix_for, prefixes, PrefixTable};
pub use severity::Severity;
