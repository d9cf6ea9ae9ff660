use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("lexical entry has an empty headword")]
    EmptyWord,

    #[error("lexical entry '{word}' has no senses")]
    EmptySenses { word: String },

    #[error("lexical entry '{word}' is defined more than once")]
    DuplicateWord { word: String },

    #[error("invalid lexicon archive: {0}")]
    Archive(String),

    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),
}
