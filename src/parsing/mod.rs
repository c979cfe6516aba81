pub mod data;
pub mod error;

use std::path::Path;

use crate::error::{SourceInfo, SourceLoc};
use crate::expansion::Expansion;

use self::data::{SquareChannel, VoiceNode};
use self::error::{ErrorType, ParsingError};

const INSTRUCTION_PREFIX: &str = "voice_";

pub fn read_source(
    source: &str,
    filename: Option<&str>,
    expansion: &Expansion,
) -> Result<Vec<VoiceNode>, ParsingError> {
    let info = SourceInfo::new(source, filename);
    let mut voices = Vec::new();

    for (line_index, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();

        if !line.starts_with(INSTRUCTION_PREFIX) {
            continue;
        }

        let loc = SourceLoc {
            line: line_index + 1,
            col: raw_line.len() - raw_line.trim_start().len() + 1,
            info: info.clone(),
            width: line.len(),
        };

        voices.push(classify(line, loc, expansion)?);
    }

    Ok(voices)
}

pub fn classify(
    line: &str,
    loc: SourceLoc,
    expansion: &Expansion,
) -> Result<VoiceNode, ParsingError> {
    let (keyword, arg_text) = match line.split_once(char::is_whitespace) {
        Some(parts) => parts,
        None => {
            return Err(ParsingError {
                loc,
                error: ErrorType::MalformedLine {
                    line: line.to_owned(),
                },
            })
        }
    };

    let params = split_params(arg_text);

    let voice = if keyword == "voice_keysplit" || keyword == "voice_keysplit_all" {
        VoiceNode::Keysplit {
            target: params.first().cloned().unwrap_or_default(),
            params,
            voices: Vec::new(),
        }
    } else if keyword.starts_with("voice_directsound") {
        let symbol = sample_symbol(&params);
        let asset_path = symbol
            .as_deref()
            .and_then(|symbol| expansion.direct_sound().resolve(symbol))
            .map(Path::to_owned);

        VoiceNode::DirectSound {
            symbol,
            asset_path,
            params,
        }
    } else if keyword.starts_with("voice_programmable_wave") {
        let symbol = sample_symbol(&params);
        let asset_path = symbol
            .as_deref()
            .and_then(|symbol| expansion.programmable_wave().resolve(symbol))
            .map(Path::to_owned);

        VoiceNode::ProgrammableWave {
            symbol,
            asset_path,
            params,
        }
    } else if keyword.starts_with("voice_square") {
        VoiceNode::Square {
            channel: square_channel(keyword),
            params,
        }
    } else if keyword.starts_with("voice_noise") {
        VoiceNode::Noise { params }
    } else {
        VoiceNode::Unknown {
            raw: line.to_owned(),
            params,
        }
    };

    Ok(voice)
}

// An `@` opens a comment that runs to the end of the line, so it has to be
// cut before the argument text is split on commas.
fn split_params(arg_text: &str) -> Vec<String> {
    let arg_text = strip_comment(arg_text);

    if arg_text.trim().is_empty() {
        return Vec::new();
    }

    arg_text
        .split(',')
        .map(|param| param.trim().to_owned())
        .collect()
}

fn strip_comment(text: &str) -> &str {
    match text.find('@') {
        Some(at) => &text[..at],
        None => text,
    }
}

fn sample_symbol(params: &[String]) -> Option<String> {
    params.get(2).filter(|symbol| !symbol.is_empty()).cloned()
}

fn square_channel(keyword: &str) -> SquareChannel {
    let suffix = keyword["voice_square".len()..].trim_start_matches('_');

    if suffix.starts_with('2') {
        SquareChannel::Two
    } else {
        SquareChannel::One
    }
}
