#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

#[macro_use]
extern crate lazy_static;

pub mod colors;
pub mod error;
pub mod expansion;
pub mod json_generation;
pub mod parsing;
pub mod resolving;
pub mod symbols;

mod trust;

#[cfg(test)]
mod test_helpers;

pub use crate::expansion::Expansion;
pub use crate::json_generation::data::{JsonGenerationOptions, PlainVoice};
pub use crate::parsing::data::{SquareChannel, VoiceNode};
pub use crate::resolving::error::ResolvingError;
pub use crate::resolving::resolve;

pub fn resolve_to_json(label: &str, expansion: &Expansion) -> Result<String, ResolvingError> {
    let tree = resolving::resolve(label, expansion)?;

    Ok(json_generation::generate_json(
        &tree,
        &JsonGenerationOptions::default(),
    ))
}
