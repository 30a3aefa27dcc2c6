pub mod dog;
pub mod error;
pub mod logger;
pub mod operations;

// Re-export commonly used items
pub use error::LogbookError;
pub use logger::{log, Severity};
