use std::collections::HashSet;
use std::sync::OnceLock;

use sense_protocol::{PartOfSpeech, TaggedToken, Token};

pub const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "has", "have", "had", "do", "does",
    "did", "saw", "see", "sees", "seen", "eat", "eats", "ate", "go", "goes", "went", "run", "runs",
    "ran", "sit", "sits", "sat", "hit", "hits", "make", "makes", "made", "take", "takes", "took",
    "give", "gives", "gave", "get", "gets", "got", "say", "says", "said", "like", "likes", "love",
    "loves", "want", "wants", "watch", "watches", "keep", "keeps", "kept", "hold", "holds", "held",
    "find", "finds", "found",
];

pub const PREPOSITIONS: &[&str] = &[
    "with", "by", "in", "on", "at", "to", "from", "of", "for", "near", "under", "over", "into",
    "onto", "about", "through", "across", "along", "beside", "between", "behind", "above", "below",
    "without",
];

/// One tagging rule. Rules are tried in order; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRule {
    /// Closed word list.
    Lexical {
        words: HashSet<String>,
        pos: PartOfSpeech,
    },
    /// Word ending.
    Suffix { suffix: String, pos: PartOfSpeech },
}

impl TagRule {
    pub fn lexical<S: AsRef<str>>(words: impl IntoIterator<Item = S>, pos: PartOfSpeech) -> Self {
        TagRule::Lexical {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            pos,
        }
    }

    pub fn suffix(suffix: &str, pos: PartOfSpeech) -> Self {
        TagRule::Suffix {
            suffix: suffix.to_string(),
            pos,
        }
    }

    pub fn apply(&self, word: &str) -> Option<PartOfSpeech> {
        match self {
            TagRule::Lexical { words, pos } => words.contains(word).then_some(*pos),
            TagRule::Suffix { suffix, pos } => word.ends_with(suffix.as_str()).then_some(*pos),
        }
    }
}

/// Context-free single-token tagger. Anything no rule claims is a noun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagger {
    rules: Vec<TagRule>,
}

impl Tagger {
    pub fn new(rules: Vec<TagRule>) -> Self {
        Self { rules }
    }

    /// Built-in rules with the verb and preposition lists extended.
    pub fn with_extra_words<V, P>(extra_verbs: &[V], extra_prepositions: &[P]) -> Self
    where
        V: AsRef<str>,
        P: AsRef<str>,
    {
        let verbs = VERBS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_verbs.iter().map(|w| w.as_ref().to_string()));
        let prepositions = PREPOSITIONS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_prepositions.iter().map(|w| w.as_ref().to_string()));

        Self::new(vec![
            TagRule::lexical(verbs, PartOfSpeech::Verb),
            TagRule::lexical(prepositions, PartOfSpeech::Preposition),
            TagRule::suffix("ing", PartOfSpeech::Gerund),
            TagRule::suffix("ed", PartOfSpeech::Past),
            TagRule::suffix("ly", PartOfSpeech::Adverb),
        ])
    }

    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    pub fn classify(&self, word: &str) -> PartOfSpeech {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(word))
            .unwrap_or(PartOfSpeech::Noun)
    }

    pub fn tag(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| TaggedToken::new(token.clone(), self.classify(&token.text)))
            .collect()
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::with_extra_words::<&str, &str>(&[], &[])
    }
}

/// Tags with the built-in rules.
pub fn tag(tokens: &[Token]) -> Vec<TaggedToken> {
    static DEFAULT: OnceLock<Tagger> = OnceLock::new();
    DEFAULT.get_or_init(Tagger::default).tag(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn tags(sentence: &str) -> Vec<(String, PartOfSpeech)> {
        tag(&tokenize(sentence))
            .into_iter()
            .map(|t| (t.token.text, t.pos))
            .collect()
    }

    #[test]
    fn test_telescope_sentence() {
        use PartOfSpeech::*;
        let expected = vec![
            ("i", Noun),
            ("saw", Verb),
            ("the", Noun),
            ("man", Noun),
            ("with", Preposition),
            ("the", Noun),
            ("telescope", Noun),
        ];
        let actual = tags("I saw the man with the telescope");
        let actual: Vec<(&str, PartOfSpeech)> =
            actual.iter().map(|(w, p)| (w.as_str(), *p)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = Tagger::default();
        assert_eq!(tagger.classify("running"), PartOfSpeech::Gerund);
        assert_eq!(tagger.classify("jumped"), PartOfSpeech::Past);
        assert_eq!(tagger.classify("quickly"), PartOfSpeech::Adverb);
        assert_eq!(tagger.classify("telescope"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_rule_precedence() {
        let tagger = Tagger::default();
        // Lexical lists beat suffixes.
        assert_eq!(tagger.classify("being"), PartOfSpeech::Verb);
        // Overlapping rules: the earlier one wins.
        let overlapping = Tagger::new(vec![
            TagRule::lexical(["run"], PartOfSpeech::Verb),
            TagRule::lexical(["run"], PartOfSpeech::Noun),
        ]);
        assert_eq!(overlapping.classify("run"), PartOfSpeech::Verb);
        assert_eq!(overlapping.classify("walk"), PartOfSpeech::Noun);
        assert_eq!(tagger.classify("bed"), PartOfSpeech::Past);
    }

    #[test]
    fn test_extra_words() {
        let tagger = Tagger::with_extra_words(&["deposit"], &["amid"]);
        assert_eq!(tagger.classify("deposit"), PartOfSpeech::Verb);
        assert_eq!(tagger.classify("amid"), PartOfSpeech::Preposition);
        assert_eq!(Tagger::default().classify("deposit"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_tag_preserves_order_and_length() {
        let tokens = tokenize("quickly running dogs barked");
        let tagged = tag(&tokens);
        assert_eq!(tagged.len(), tokens.len());
        for (t, original) in tagged.iter().zip(&tokens) {
            assert_eq!(&t.token, original);
        }
    }
}
