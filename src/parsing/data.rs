use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareChannel {
    One,
    Two,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceNode {
    Group {
        label: String,
        voices: Vec<VoiceNode>,
    },
    Keysplit {
        target: String,
        params: Vec<String>,
        voices: Vec<VoiceNode>,
    },
    DirectSound {
        symbol: Option<String>,
        asset_path: Option<PathBuf>,
        params: Vec<String>,
    },
    ProgrammableWave {
        symbol: Option<String>,
        asset_path: Option<PathBuf>,
        params: Vec<String>,
    },
    Square {
        channel: SquareChannel,
        params: Vec<String>,
    },
    Noise {
        params: Vec<String>,
    },
    Unknown {
        raw: String,
        params: Vec<String>,
    },
}

impl VoiceNode {
    pub fn voices(&self) -> &[VoiceNode] {
        match self {
            VoiceNode::Group { voices, .. } | VoiceNode::Keysplit { voices, .. } => voices,
            _ => &[],
        }
    }

    pub fn into_voices(self) -> Vec<VoiceNode> {
        match self {
            VoiceNode::Group { voices, .. } | VoiceNode::Keysplit { voices, .. } => voices,
            _ => Vec::new(),
        }
    }

    pub fn params(&self) -> &[String] {
        match self {
            VoiceNode::Group { .. } => &[],
            VoiceNode::Keysplit { params, .. }
            | VoiceNode::DirectSound { params, .. }
            | VoiceNode::ProgrammableWave { params, .. }
            | VoiceNode::Square { params, .. }
            | VoiceNode::Noise { params }
            | VoiceNode::Unknown { params, .. } => params,
        }
    }

    pub fn readable_type(&self) -> &'static str {
        match self {
            VoiceNode::Group { .. } => "Group",
            VoiceNode::Keysplit { .. } => "Keysplit",
            VoiceNode::DirectSound { .. } => "DirectSound",
            VoiceNode::ProgrammableWave { .. } => "Programwave",
            VoiceNode::Square {
                channel: SquareChannel::One,
                ..
            } => "Square1",
            VoiceNode::Square {
                channel: SquareChannel::Two,
                ..
            } => "Square2",
            VoiceNode::Noise { .. } => "Noise",
            VoiceNode::Unknown { .. } => "Unknown",
        }
    }
}
