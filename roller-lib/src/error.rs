/// Crate Error type
///
/// Both variants carry the reason of the rejection and the part of the input
/// that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The notation does not follow the dice grammar
    Syntax { reason: String, offending: String },
    /// The notation is well formed but holds a value a roll can't accept
    Value { reason: String, offending: String },
}

impl Error {
    pub(crate) fn syntax(reason: impl Into<String>, offending: impl Into<String>) -> Self {
        Self::Syntax {
            reason: reason.into(),
            offending: offending.into(),
        }
    }

    pub(crate) fn value(reason: impl Into<String>, offending: impl Into<String>) -> Self {
        Self::Value {
            reason: reason.into(),
            offending: offending.into(),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Syntax { reason, .. } | Self::Value { reason, .. } => reason,
        }
    }

    pub fn offending(&self) -> &str {
        match self {
            Self::Syntax { offending, .. } | Self::Value { offending, .. } => offending,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax { reason, offending } if offending.is_empty() => {
                write!(f, "invalid dice notation: {reason}")
            }
            Self::Syntax { reason, offending } => {
                write!(f, "invalid dice notation at `{offending}`: {reason}")
            }
            Self::Value { reason, offending } => write!(f, "{reason} (`{offending}`)"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
