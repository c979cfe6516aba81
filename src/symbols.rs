use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::trust::Trust;

lazy_static! {
    static ref SAMPLE_BLOCK_REGEX: Regex =
        Regex::new("(?s)([A-Za-z_][A-Za-z0-9_]*)::.*?\\.incbin\\s+\"([^\"]+)\"").trust();
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<String, PathBuf>,
}

impl SymbolTable {
    pub fn load(table_file: &Path, asset_root: &Path) -> SymbolTable {
        match fs::read_to_string(table_file) {
            Ok(source) => SymbolTable::from_source(&source, asset_root),
            Err(_) => SymbolTable::default(),
        }
    }

    pub fn from_source(source: &str, asset_root: &Path) -> SymbolTable {
        let mut entries = HashMap::new();

        for capture in SAMPLE_BLOCK_REGEX.captures_iter(source) {
            let label = capture.get(1).trust().as_str().to_owned();
            let rel_path = capture.get(2).trust().as_str();

            entries.insert(label, asset_root.join(rel_path));
        }

        SymbolTable { entries }
    }

    pub fn resolve(&self, label: &str) -> Option<&Path> {
        self.entries.get(label).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(source: &str) -> SymbolTable {
        SymbolTable::from_source(source, Path::new("exp"))
    }

    #[test]
    fn pairs_a_label_with_its_incbin_path() {
        let table = table("DirectSoundWaveData_bass::\n\t.incbin \"sound/samples/bass.bin\"\n");

        assert_eq!(
            table.resolve("DirectSoundWaveData_bass"),
            Some(Path::new("exp/sound/samples/bass.bin"))
        );
    }

    #[test]
    fn reads_every_block_in_a_data_file() {
        let table = table(
            "\t.align 2\n\
             DirectSoundWaveData_bass::\n\
             \t.incbin \"sound/samples/bass.bin\"\n\
             \n\
             \t.align 2\n\
             DirectSoundWaveData_tympani::\n\
             \t.incbin \"sound/samples/tympani.bin\"\n",
        );

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.resolve("DirectSoundWaveData_tympani"),
            Some(Path::new("exp/sound/samples/tympani.bin"))
        );
    }

    #[test]
    fn pairs_a_label_with_the_nearest_following_path() {
        // An alias label with no data of its own swallows the next block's
        // path. The shadowed label is left out rather than reported.
        let table = table(
            "DirectSoundWaveData_alias::\n\
             DirectSoundWaveData_real::\n\
             \t.incbin \"sound/samples/real.bin\"\n",
        );

        assert_eq!(
            table.resolve("DirectSoundWaveData_alias"),
            Some(Path::new("exp/sound/samples/real.bin"))
        );
        assert_eq!(table.resolve("DirectSoundWaveData_real"), None);
    }

    #[test]
    fn skips_a_trailing_label_with_no_path() {
        let table = table(
            "DirectSoundWaveData_bass::\n\
             \t.incbin \"sound/samples/bass.bin\"\n\
             \n\
             DirectSoundWaveData_lost::\n\
             @ sample data removed\n",
        );

        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("DirectSoundWaveData_lost"), None);
    }

    #[test]
    fn resolves_nothing_from_an_empty_source() {
        let table = table("");

        assert!(table.is_empty());
        assert_eq!(table.resolve("DirectSoundWaveData_bass"), None);
    }

    #[test]
    fn loads_an_empty_table_when_the_file_is_missing() {
        let table = SymbolTable::load(
            Path::new("no_such_dir/direct_sound_data.inc"),
            Path::new("no_such_dir"),
        );

        assert!(table.is_empty());
    }
}
