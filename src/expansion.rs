use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::symbols::SymbolTable;

const VOICEGROUPS_DIR: &str = "sound/voicegroups";
const DIRECT_SOUND_TABLE: &str = "sound/direct_sound_data.inc";
const PROGRAMMABLE_WAVE_TABLE: &str = "sound/programmable_wave_data.inc";
const VOICEGROUP_EXTENSION: &str = "inc";

#[derive(Debug, Clone)]
pub struct Expansion {
    root: PathBuf,
    voicegroups_dir: PathBuf,
    direct_sound: SymbolTable,
    programmable_wave: SymbolTable,
}

impl Expansion {
    pub fn open<P>(root: P) -> Expansion
    where
        P: AsRef<Path>,
    {
        let root = root.as_ref().to_owned();
        let direct_sound = SymbolTable::load(&root.join(DIRECT_SOUND_TABLE), &root);
        let programmable_wave = SymbolTable::load(&root.join(PROGRAMMABLE_WAVE_TABLE), &root);

        Expansion {
            voicegroups_dir: root.join(VOICEGROUPS_DIR),
            root,
            direct_sound,
            programmable_wave,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_tables(
        direct_sound: SymbolTable,
        programmable_wave: SymbolTable,
    ) -> Expansion {
        Expansion {
            root: PathBuf::new(),
            voicegroups_dir: PathBuf::from(VOICEGROUPS_DIR),
            direct_sound,
            programmable_wave,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn direct_sound(&self) -> &SymbolTable {
        &self.direct_sound
    }

    pub fn programmable_wave(&self) -> &SymbolTable {
        &self.programmable_wave
    }

    pub fn voicegroup_path(&self, label: &str) -> PathBuf {
        if label.contains('.') {
            self.voicegroups_dir.join(label)
        } else {
            self.voicegroups_dir
                .join(format!("{}.{}", label, VOICEGROUP_EXTENSION))
        }
    }

    pub fn voicegroups(&self) -> Vec<String> {
        let mut labels = Vec::new();

        if let Ok(entries) = fs::read_dir(&self.voicegroups_dir) {
            for entry in entries.flatten() {
                let path = entry.path();

                if path.extension() == Some(OsStr::new(VOICEGROUP_EXTENSION)) {
                    if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
                        labels.push(stem.to_owned());
                    }
                }
            }
        }

        labels.sort();
        labels
    }
}
