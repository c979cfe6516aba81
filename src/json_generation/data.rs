use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonGenerationOptions {
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlainVoice {
    Group {
        voicegroup: String,
        samples: Vec<PlainVoice>,
    },

    Keysplit {
        voicegroup: String,
        params: Vec<String>,
        samples: Vec<PlainVoice>,
    },

    DirectSound {
        #[serde(rename = "sampleSymbol", default, skip_serializing_if = "Option::is_none")]
        sample_symbol: Option<String>,

        #[serde(rename = "assetPath", default, skip_serializing_if = "Option::is_none")]
        asset_path: Option<String>,

        params: Vec<String>,
    },

    Programwave {
        #[serde(rename = "sampleSymbol", default, skip_serializing_if = "Option::is_none")]
        sample_symbol: Option<String>,

        #[serde(rename = "assetPath", default, skip_serializing_if = "Option::is_none")]
        asset_path: Option<String>,

        params: Vec<String>,
    },

    Square1 {
        params: Vec<String>,
    },

    Square2 {
        params: Vec<String>,
    },

    Noise {
        params: Vec<String>,
    },

    Unknown {
        #[serde(rename = "rawLine")]
        raw_line: String,

        params: Vec<String>,
    },
}
