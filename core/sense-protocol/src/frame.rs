use alloc::string::String;
use core::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum FrameSlot {
    Actor,
    Action,
    Object,
    Modifier,
}

/// Shallow actor/action/object/modifier frame for one sentence.
/// Each slot holds at most one word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct SemanticFrame {
    pub actor: Option<String>,
    pub action: Option<String>,
    pub object: Option<String>,
    pub modifier: Option<String>,
}

impl SemanticFrame {
    pub fn get(&self, slot: FrameSlot) -> Option<&str> {
        match slot {
            FrameSlot::Actor => self.actor.as_deref(),
            FrameSlot::Action => self.action.as_deref(),
            FrameSlot::Object => self.object.as_deref(),
            FrameSlot::Modifier => self.modifier.as_deref(),
        }
    }

    /// A frame without an action cannot yield relations.
    pub fn is_complete(&self) -> bool {
        self.action.is_some()
    }
}

/// UNL-style relation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Predicate {
    #[cfg_attr(feature = "serde", serde(rename = "agt"))]
    Agent,
    #[cfg_attr(feature = "serde", serde(rename = "obj"))]
    Object,
    #[cfg_attr(feature = "serde", serde(rename = "mod"))]
    Modifier,
}

impl Predicate {
    pub const fn as_str(self) -> &'static str {
        match self {
            Predicate::Agent => "agt",
            Predicate::Object => "obj",
            Predicate::Modifier => "mod",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "agt" => Some(Predicate::Agent),
            "obj" => Some(Predicate::Object),
            "mod" => Some(Predicate::Modifier),
            _ => None,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation argument: a word, or an explicitly unset frame slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Argument {
    Word(String),
    Unset,
}

impl Argument {
    /// Text used for an unset argument at the text boundary.
    pub const UNSET_TEXT: &'static str = "unknown";

    /// Whether a word must be written quoted to read back as the same word.
    /// The literal word `unknown` is quoted so it stays apart from `Unset`.
    pub fn needs_quoting(word: &str) -> bool {
        word.is_empty()
            || word == Self::UNSET_TEXT
            || word
                .chars()
                .any(|c| matches!(c, ',' | '(' | ')' | '"' | '\\') || c.is_whitespace())
    }

    pub fn word(text: impl Into<String>) -> Self {
        Argument::Word(text.into())
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Argument::Word(w) => Some(w),
            Argument::Unset => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Argument::Unset)
    }
}

impl From<Option<String>> for Argument {
    fn from(slot: Option<String>) -> Self {
        slot.map_or(Argument::Unset, Argument::Word)
    }
}

impl From<Option<&str>> for Argument {
    fn from(slot: Option<&str>) -> Self {
        slot.map_or(Argument::Unset, Argument::word)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Word(w) if Self::needs_quoting(w) => {
                f.write_char('"')?;
                for c in w.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('"')
            }
            Argument::Word(w) => f.write_str(w),
            Argument::Unset => f.write_str(Self::UNSET_TEXT),
        }
    }
}

/// `predicate(source,target)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Relation {
    pub predicate: Predicate,
    pub source: Argument,
    pub target: Argument,
}

impl Relation {
    pub fn new(predicate: Predicate, source: Argument, target: Argument) -> Self {
        Self {
            predicate,
            source,
            target,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.predicate, self.source, self.target)
    }
}

/// Label returned when a structural rule fires.
pub const ATTACHMENT_AMBIGUITY_LABEL: &str = "possible attachment ambiguity";
/// Label returned when no structural rule fires.
pub const NO_STRUCTURAL_AMBIGUITY_LABEL: &str = "no structural ambiguity detected.";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
pub enum StructuralFlag {
    Ambiguous { trigger: String, label: String },
    Clear,
}

impl StructuralFlag {
    pub fn label(&self) -> &str {
        match self {
            StructuralFlag::Ambiguous { label, .. } => label,
            StructuralFlag::Clear => NO_STRUCTURAL_AMBIGUITY_LABEL,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, StructuralFlag::Ambiguous { .. })
    }
}

impl fmt::Display for StructuralFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
