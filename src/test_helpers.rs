use std::path::Path;

use crate::parsing::data::{SquareChannel, VoiceNode};

pub fn params(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split(',').map(|param| param.trim().to_owned()).collect()
}

pub fn square(channel: SquareChannel, args: &str) -> VoiceNode {
    VoiceNode::Square {
        channel,
        params: params(args),
    }
}

pub fn noise(args: &str) -> VoiceNode {
    VoiceNode::Noise {
        params: params(args),
    }
}

pub fn keysplit(args: &str) -> VoiceNode {
    let params = params(args);

    VoiceNode::Keysplit {
        target: params.first().cloned().unwrap_or_default(),
        params,
        voices: Vec::new(),
    }
}

pub fn direct_sound(symbol: &str, asset_path: Option<&str>, args: &str) -> VoiceNode {
    VoiceNode::DirectSound {
        symbol: Some(symbol.to_owned()),
        asset_path: asset_path.map(|path| Path::new(path).to_owned()),
        params: params(args),
    }
}
