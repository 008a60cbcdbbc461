/// A structured event from a mirror run, carried in the per-pair report so
/// callers decide how to present it (the CLI prints, tests assert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Informational message.
    Info(String),
    /// A package failed; the run continued.
    Error(String),
}

impl Feedback {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Error(msg) => msg,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info(msg) => write!(f, "{msg}"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}
