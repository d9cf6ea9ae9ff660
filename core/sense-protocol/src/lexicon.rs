use alloc::string::String;
use alloc::vec::Vec;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Sense index used when no trigger selects anything else.
pub const PRIMARY_SENSE: usize = 0;
/// Sense index selected by the "water" trigger family.
pub const ALTERNATE_SENSE: usize = 1;

/// One ambiguous headword and its candidate senses, primary first.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexicalEntry {
    pub word: String,
    pub senses: Vec<String>,
}

impl LexicalEntry {
    pub fn new<W, S>(word: W, senses: impl IntoIterator<Item = S>) -> Self
    where
        W: Into<String>,
        S: Into<String>,
    {
        Self {
            word: word.into(),
            senses: senses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Versioned lexicon as stored on disk (JSON) or compiled (rkyv).
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexicalEntry>,
}

/// The sense picked for one word of a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SenseChoice {
    pub word: String,
    pub sense: String,
    pub index: usize,
}

/// Word → selected sense, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SenseAssignment {
    choices: Vec<SenseChoice>,
}

impl SenseAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a choice unless the word already has one.
    /// Returns `false` when the word was already assigned.
    pub fn assign(&mut self, choice: SenseChoice) -> bool {
        if self.get(&choice.word).is_some() {
            return false;
        }
        self.choices.push(choice);
        true
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.word == word)
            .map(|c| c.sense.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SenseChoice> {
        self.choices.iter()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl<'a> IntoIterator for &'a SenseAssignment {
    type Item = &'a SenseChoice;
    type IntoIter = core::slice::Iter<'a, SenseChoice>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.iter()
    }
}
