pub mod error;

use std::fs;

use crate::expansion::Expansion;
use crate::parsing;
use crate::parsing::data::VoiceNode;

use self::error::ResolvingError;

pub const MAX_DEPTH: usize = 64;

pub fn resolve(label: &str, expansion: &Expansion) -> Result<VoiceNode, ResolvingError> {
    let mut visited = Vec::new();

    resolve_nested(label, expansion, &mut visited)
}

fn resolve_nested(
    label: &str,
    expansion: &Expansion,
    visited: &mut Vec<String>,
) -> Result<VoiceNode, ResolvingError> {
    if visited.iter().any(|seen| seen == label) {
        return Ok(cycle_group(label));
    }

    if visited.len() >= MAX_DEPTH {
        return Err(ResolvingError::DepthLimitExceeded {
            label: label.to_owned(),
            limit: MAX_DEPTH,
        });
    }

    let path = expansion.voicegroup_path(label);
    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(_) => {
            return Err(ResolvingError::VoicegroupNotFound {
                label: label.to_owned(),
                path,
            })
        }
    };

    let filename = path.display().to_string();
    let mut voices = parsing::read_source(&source, Some(&filename), expansion)?;

    visited.push(label.to_owned());

    for voice in &mut voices {
        if let VoiceNode::Keysplit {
            target,
            voices: splice,
            ..
        } = voice
        {
            let group = resolve_nested(target, expansion, visited)?;
            *splice = group.into_voices();
        }
    }

    visited.pop();

    Ok(VoiceNode::Group {
        label: label.to_owned(),
        voices,
    })
}

// A revisited label resolves to a group holding one sentinel voice instead
// of recursing, which keeps self-referential banks renderable.
fn cycle_group(label: &str) -> VoiceNode {
    VoiceNode::Group {
        label: label.to_owned(),
        voices: vec![VoiceNode::Unknown {
            raw: format!("@ cycle detected: {} is already being expanded", label),
            params: Vec::new(),
        }],
    }
}
