use std::fmt;
use std::io;
use std::path::PathBuf;

use tinct_color::ColorError;
use tinct_tokens::TokenError;

/// Failures while running a command.
#[derive(Debug)]
pub enum CliError {
    Color(ColorError),
    Token(TokenError),
    Json(serde_json::Error),
    /// Writing `--out` failed.
    Write { path: PathBuf, source: io::Error },
    /// A flag that the command cannot honor, e.g. `--format=css` on `contrast`.
    Unsupported { command: &'static str, flag: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "{err}"),
            Self::Token(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "failed to render JSON: {err}"),
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            Self::Unsupported { command, flag } => {
                write!(f, "{flag} is not supported by `{command}`")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(err) => Some(err),
            Self::Token(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Write { source, .. } => Some(source),
            Self::Unsupported { .. } => None,
        }
    }
}

impl From<ColorError> for CliError {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl From<TokenError> for CliError {
    fn from(err: TokenError) -> Self {
        Self::Token(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
