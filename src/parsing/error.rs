use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::error::{self, SourceLoc};

#[derive(Debug, Error, PartialEq, Eq)]
pub struct ParsingError {
    pub loc: SourceLoc,
    pub error: ErrorType,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorType {
    MalformedLine { line: String },
}

impl Display for ParsingError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        use self::ErrorType::*;

        let error_message = match self.error {
            MalformedLine { ref line } => {
                format!(
                    "Malformed voice instruction `{}`. Expected arguments after the keyword.",
                    line
                )
            }
        };

        error::fmt_error(
            f,
            &error_message,
            self.loc.info.filename(),
            self.loc.cause_line(),
            self.loc.line,
            self.loc.col,
            self.loc.width,
        )
    }
}
