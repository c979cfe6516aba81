use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

use crate::error;
use crate::parsing::error::ParsingError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolvingError {
    VoicegroupNotFound { label: String, path: PathBuf },

    DepthLimitExceeded { label: String, limit: usize },

    Parsing(#[from] ParsingError),
}

impl Display for ResolvingError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        use self::ResolvingError::*;

        match self {
            VoicegroupNotFound { label, path } => error::fmt_simple_error(
                f,
                &format!("No voicegroup named `{}`.", label),
                &path.display().to_string(),
            ),

            DepthLimitExceeded { label, limit } => error::fmt_simple_error(
                f,
                &format!(
                    "Keysplits nested deeper than {} levels while expanding `{}`.",
                    limit, label
                ),
                label,
            ),

            Parsing(parsing_error) => Display::fmt(parsing_error, f),
        }
    }
}
