use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LogbookError {
    IoError(std::io::Error),
}

impl fmt::Display for LogbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogbookError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl Error for LogbookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LogbookError::IoError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LogbookError {
    fn from(err: std::io::Error) -> Self {
        LogbookError::IoError(err)
    }
}
