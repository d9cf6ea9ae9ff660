use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rkyv::AlignedVec;
use sense_protocol::{LexicalEntry, Lexicon};
use tracing::{debug, info};

use crate::error::LexiconError;

/// Lexicon shipped with the engine.
const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    ("bank", &["financial institution", "river side"]),
    ("bat", &["flying mammal", "cricket equipment"]),
    ("telescope", &["optical instrument"]),
    ("man", &["human male", "person"]),
];

pub const BUILTIN_VERSION: u32 = 1;

/// Immutable word → senses table.
///
/// Built once and shared read-only by every analysis. Headwords are
/// lowercased on load because tokens are always lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    version: u32,
    entries: Vec<LexicalEntry>,
    index_map: HashMap<String, usize>,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        let entries: Vec<LexicalEntry> = BUILTIN_ENTRIES
            .iter()
            .map(|(word, senses)| LexicalEntry::new(*word, senses.iter().copied()))
            .collect();
        let index_map = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.word.clone(), idx))
            .collect();

        Self {
            version: BUILTIN_VERSION,
            entries,
            index_map,
        }
    }

    /// Validates a lexicon and indexes it by headword.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self, LexiconError> {
        let mut entries = Vec::with_capacity(lexicon.entries.len());
        let mut index_map = HashMap::with_capacity(lexicon.entries.len());

        for entry in lexicon.entries {
            let word = entry.word.trim().to_lowercase();
            if word.is_empty() {
                return Err(LexiconError::EmptyWord);
            }
            if entry.senses.is_empty() {
                return Err(LexiconError::EmptySenses { word });
            }
            if index_map.contains_key(&word) {
                return Err(LexiconError::DuplicateWord { word });
            }

            index_map.insert(word.clone(), entries.len());
            entries.push(LexicalEntry {
                word,
                senses: entry.senses,
            });
        }

        debug!(version = lexicon.version, entries = entries.len(), "Indexed lexicon");
        Ok(Self {
            version: lexicon.version,
            entries,
            index_map,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        Self::from_lexicon(lexicon)
    }

    /// Loads a compiled (rkyv) lexicon after validating the archive.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Archives read from disk are not guaranteed to be aligned.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<Lexicon>(&aligned)
            .map_err(|e| LexiconError::Archive(e.to_string()))?;

        let lexicon = Lexicon {
            version: u32::from(archived.version),
            entries: archived
                .entries
                .iter()
                .map(|entry| {
                    LexicalEntry::new(entry.word.as_str(), entry.senses.iter().map(|s| s.as_str()))
                })
                .collect(),
        };

        Self::from_lexicon(lexicon)
    }

    /// Loads a lexicon file. `.json` files are parsed as JSON, anything
    /// else is treated as a compiled archive.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let kb = if is_json {
            Self::from_json_str(&fs::read_to_string(path)?)?
        } else {
            Self::from_archive(&fs::read(path)?)?
        };

        info!(path = %path.display(), version = kb.version, entries = kb.len(), "Loaded lexicon");
        Ok(kb)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn senses(&self, word: &str) -> Option<&[String]> {
        self.index_map
            .get(word)
            .map(|&idx| self.entries[idx].senses.as_slice())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index_map.contains_key(word)
    }

    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_lexicon(&self) -> Lexicon {
        Lexicon {
            version: self.version,
            entries: self.entries.clone(),
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Validates a lexicon and serializes it to an rkyv archive.
pub fn compile_lexicon(lexicon: &Lexicon) -> Result<Vec<u8>, LexiconError> {
    let kb = KnowledgeBase::from_lexicon(lexicon.clone())?;
    let bytes = rkyv::to_bytes::<_, 1024>(&kb.to_lexicon())
        .map_err(|e| LexiconError::Archive(e.to_string()))?;
    Ok(bytes.to_vec())
}
