use serde::{Deserialize, Serialize};
use sense_protocol::{SenseAssignment, SenseChoice, Token, ALTERNATE_SENSE, PRIMARY_SENSE};
use tracing::debug;

use crate::knowledge::KnowledgeBase;

/// A family of sentence keywords that selects one sense index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerRule {
    pub triggers: Vec<String>,
    pub sense: usize,
}

impl TriggerRule {
    pub fn new<S: Into<String>>(triggers: impl IntoIterator<Item = S>, sense: usize) -> Self {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            sense,
        }
    }

    /// Default rules, evaluated in order: water context first, then
    /// money/sport context.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(["river", "water"], ALTERNATE_SENSE),
            Self::new(["money", "cricket"], PRIMARY_SENSE),
        ]
    }
}

/// How triggers are looked up in a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMatching {
    /// Case-sensitive substring search on the raw sentence.
    /// "delivery" therefore matches "river".
    #[default]
    Substring,
    /// Exact match against the sentence's tokens.
    Token,
}

pub struct Disambiguator<'a> {
    kb: &'a KnowledgeBase,
    rules: &'a [TriggerRule],
    matching: TriggerMatching,
}

impl<'a> Disambiguator<'a> {
    pub fn new(kb: &'a KnowledgeBase, rules: &'a [TriggerRule]) -> Self {
        Self {
            kb,
            rules,
            matching: TriggerMatching::default(),
        }
    }

    pub fn with_matching(mut self, matching: TriggerMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Sense index the sentence context asks for. The first rule with a
    /// matching trigger wins; no match means the primary sense.
    pub fn context_sense(&self, sentence: &str, tokens: &[Token]) -> usize {
        self.rules
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| self.matches(t, sentence, tokens)))
            .map_or(PRIMARY_SENSE, |rule| rule.sense)
    }

    fn matches(&self, trigger: &str, sentence: &str, tokens: &[Token]) -> bool {
        match self.matching {
            TriggerMatching::Substring => sentence.contains(trigger),
            TriggerMatching::Token => tokens.iter().any(|t| t.text == trigger),
        }
    }

    /// Picks one sense for every knowledge-base word of the sentence.
    /// Words outside the knowledge base are left out.
    pub fn disambiguate(&self, sentence: &str, tokens: &[Token]) -> SenseAssignment {
        let wanted = self.context_sense(sentence, tokens);
        let mut assignment = SenseAssignment::new();

        for token in tokens {
            let Some(senses) = self.kb.senses(&token.text) else {
                continue;
            };

            // Single-sense words keep their only reading.
            let index = if wanted < senses.len() { wanted } else { PRIMARY_SENSE };

            let fresh = assignment.assign(SenseChoice {
                word: token.text.clone(),
                sense: senses[index].clone(),
                index,
            });
            if fresh {
                debug!(word = %token.text, index, "Selected sense");
            }
        }

        assignment
    }
}

/// Disambiguates with the default trigger rules and substring matching.
pub fn disambiguate(kb: &KnowledgeBase, sentence: &str, tokens: &[Token]) -> SenseAssignment {
    let rules = TriggerRule::defaults();
    Disambiguator::new(kb, &rules).disambiguate(sentence, tokens)
}
