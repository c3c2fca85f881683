use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// Every failure in this crate is a caller handing over a bad argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid dimension was zero or negative.
    InvalidGridSize(isize),

    /// Row outside `[1, n]`.
    RowOutOfBounds { row: isize, n: usize },

    /// Column outside `[1, n]`.
    ColumnOutOfBounds { col: isize, n: usize },

    /// Union-find element outside `[0, len)`.
    ElementOutOfRange { index: usize, len: usize },

    /// Monte Carlo trial count was zero or negative.
    InvalidTrials(isize),

    /// A configuration key held a value of the wrong shape.
    InvalidConfig { key: String, reason: String },
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidGridSize(_)
            | Error::RowOutOfBounds { .. }
            | Error::ColumnOutOfBounds { .. }
            | Error::ElementOutOfRange { .. }
            | Error::InvalidTrials(_)
            | Error::InvalidConfig { .. } => true,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidGridSize(n) => write!(f, "grid size must be positive, got {}", n),
            Error::RowOutOfBounds { row, n } => {
                write!(f, "row {} out of bounds for a {}x{} grid", row, n, n)
            }
            Error::ColumnOutOfBounds { col, n } => {
                write!(f, "column {} out of bounds for a {}x{} grid", col, n, n)
            }
            Error::ElementOutOfRange { index, len } => {
                write!(f, "element {} outside [0, {})", index, len)
            }
            Error::InvalidTrials(t) => write!(f, "number of trials must be positive, got {}", t),
            Error::InvalidConfig { key, reason } => {
                write!(f, "bad config value for `{}`: {}", key, reason)
            }
        }
    }
}

impl error::Error for Error {}
