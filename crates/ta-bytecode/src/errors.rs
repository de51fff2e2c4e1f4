use core::fmt;

/// Errors that can occur while emitting bytecode for a font style.
#[derive(Debug)]
#[non_exhaustive]
pub enum HintError {
    /// A CVT value exceeded the 16-bit signed range the table can hold.
    HinterOverflow {
        /// The table the overflowing value would have been written to.
        table: &'static str,
        /// The value that overflowed.
        value: u32,
    },
    /// A glyph index was negative (or otherwise out of range).
    InvalidArgument {
        /// Human-readable description of the invalid argument.
        reason: &'static str,
    },
    /// The auto-hinter (or another external collaborator) reported an error
    /// while priming or re-running its analysis.
    Source(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HinterOverflow { table, value } => {
                write!(f, "value {value} overflows the `{table}` table")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Source(err) => write!(f, "auto-hinter error: {err}"),
        }
    }
}

impl std::error::Error for HintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl HintError {
    pub(crate) fn overflow(table: &'static str, value: u32) -> Self {
        Self::HinterOverflow { table, value }
    }
}
