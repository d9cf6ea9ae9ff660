use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Coarse part-of-speech tag assigned by the rule tagger.
///
/// The set is closed: a new tag needs a new tagger rule, not a new field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum PartOfSpeech {
    Verb = 0,
    Preposition = 1,
    Gerund = 2,
    Past = 3,
    Adverb = 4,
    Noun = 5,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 6] = [
        PartOfSpeech::Verb,
        PartOfSpeech::Preposition,
        PartOfSpeech::Gerund,
        PartOfSpeech::Past,
        PartOfSpeech::Adverb,
        PartOfSpeech::Noun,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Preposition => "PREPOSITION",
            PartOfSpeech::Gerund => "GERUND",
            PartOfSpeech::Past => "PAST",
            PartOfSpeech::Adverb => "ADVERB",
            PartOfSpeech::Noun => "NOUN",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
