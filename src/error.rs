use std::{fmt, io};

/// Every failure a chain step can end with.
#[derive(Debug)]
pub enum Error {
    IoError(io::Error),
    SerdeError(serde_json::Error),
    HttpError(reqwest::Error),
    /// No token could be obtained for the given username.
    Auth { username: String, reason: String },
    /// A step needs a context slot no earlier step provides.
    MissingContext { step: &'static str, key: &'static str },
    /// The subcommand chain could not be split into commands.
    Chain(String),
    /// A command of the chain has invalid options, or asked for help.
    Usage(clap::Error),
    /// A release date matched neither `YYYY-MM-DD` nor `YYYY`.
    ReleaseDate { album: String, value: String },
    /// A week count reaches before the earliest date the calendar supports.
    Cutoff { weeks: u32 },
    Prompt(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "I/O error: {}", e),
            Error::SerdeError(e) => write!(f, "JSON error: {}", e),
            Error::HttpError(e) => write!(f, "HTTP error: {}", e),
            Error::Auth { username, reason } => {
                write!(f, "Can't get token for {}: {}", username, reason)
            }
            Error::MissingContext { step, key } => write!(
                f,
                "`{}` needs {}, which no earlier command provides",
                step, key
            ),
            Error::Chain(msg) => write!(f, "{}", msg),
            Error::Usage(e) => write!(f, "{}", e),
            Error::ReleaseDate { album, value } => write!(
                f,
                "Cannot parse release date '{}' of album {}",
                value, album
            ),
            Error::Cutoff { weeks } => {
                write!(f, "Cannot go back {} weeks from today", weeks)
            }
            Error::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            Error::SerdeError(e) => Some(e),
            Error::HttpError(e) => Some(e),
            Error::Usage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerdeError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::HttpError(err)
    }
}
