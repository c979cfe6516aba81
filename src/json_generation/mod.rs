pub mod data;

use crate::parsing::data::{SquareChannel, VoiceNode};
use crate::trust::Trust;

use self::data::{JsonGenerationOptions, PlainVoice};

pub fn generate_json(voice: &VoiceNode, options: &JsonGenerationOptions) -> String {
    let plain = to_plain(voice);

    if options.pretty {
        serde_json::to_string_pretty(&plain).trust()
    } else {
        serde_json::to_string(&plain).trust()
    }
}

pub fn to_plain(voice: &VoiceNode) -> PlainVoice {
    match voice {
        VoiceNode::Group { label, voices } => PlainVoice::Group {
            voicegroup: label.clone(),
            samples: voices.iter().map(to_plain).collect(),
        },

        VoiceNode::Keysplit {
            target,
            params,
            voices,
        } => PlainVoice::Keysplit {
            voicegroup: target.clone(),
            params: params.clone(),
            samples: voices.iter().map(to_plain).collect(),
        },

        VoiceNode::DirectSound {
            symbol,
            asset_path,
            params,
        } => PlainVoice::DirectSound {
            sample_symbol: symbol.clone(),
            asset_path: asset_path.as_ref().map(|path| path.display().to_string()),
            params: params.clone(),
        },

        VoiceNode::ProgrammableWave {
            symbol,
            asset_path,
            params,
        } => PlainVoice::Programwave {
            sample_symbol: symbol.clone(),
            asset_path: asset_path.as_ref().map(|path| path.display().to_string()),
            params: params.clone(),
        },

        VoiceNode::Square {
            channel: SquareChannel::One,
            params,
        } => PlainVoice::Square1 {
            params: params.clone(),
        },

        VoiceNode::Square {
            channel: SquareChannel::Two,
            params,
        } => PlainVoice::Square2 {
            params: params.clone(),
        },

        VoiceNode::Noise { params } => PlainVoice::Noise {
            params: params.clone(),
        },

        VoiceNode::Unknown { raw, params } => PlainVoice::Unknown {
            raw_line: raw.clone(),
            params: params.clone(),
        },
    }
}
