use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ReportError {
    EmptyInput,
    /// `position` is 1-based among the non-blank input lines.
    InvalidRuleUuid { uuid: String, position: usize },
    Io(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::EmptyInput => write!(f, "Cannot find any input to process"),
            ReportError::InvalidRuleUuid { uuid, position } => {
                write!(f, "Input is not in expected UUID format (line {position}): {uuid}")
            }
            ReportError::Io(e) => write!(f, "Failed to write report config: {e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Io(e)
    }
}
