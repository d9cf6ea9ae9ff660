use serde::{Deserialize, Serialize};
use sense_protocol::{StructuralFlag, ATTACHMENT_AMBIGUITY_LABEL};

/// Keyword that signals a structural ambiguity, and the label to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralRule {
    pub trigger: String,
    pub label: String,
}

impl StructuralRule {
    pub fn new(trigger: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            label: label.into(),
        }
    }

    /// Prepositional-phrase attachment, signalled by "with".
    pub fn attachment() -> Self {
        Self::new("with", ATTACHMENT_AMBIGUITY_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralDetector {
    rules: Vec<StructuralRule>,
}

impl StructuralDetector {
    pub fn new(rules: Vec<StructuralRule>) -> Self {
        Self { rules }
    }

    /// Case-sensitive substring check on the raw sentence; first rule wins.
    pub fn detect(&self, sentence: &str) -> StructuralFlag {
        self.rules
            .iter()
            .find(|rule| sentence.contains(rule.trigger.as_str()))
            .map_or(StructuralFlag::Clear, |rule| StructuralFlag::Ambiguous {
                trigger: rule.trigger.clone(),
                label: rule.label.clone(),
            })
    }
}

impl Default for StructuralDetector {
    fn default() -> Self {
        Self::new(vec![StructuralRule::attachment()])
    }
}

pub fn detect_structural_ambiguity(sentence: &str) -> StructuralFlag {
    StructuralDetector::default().detect(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sense_protocol::NO_STRUCTURAL_AMBIGUITY_LABEL;

    #[test]
    fn test_with_is_flagged() {
        let flag = detect_structural_ambiguity("I saw the man with the telescope");
        assert!(flag.is_ambiguous());
        assert_eq!(flag.label(), "possible attachment ambiguity");
    }

    #[test]
    fn test_clear_sentence() {
        let flag = detect_structural_ambiguity("The bank is by the river");
        assert_eq!(flag, StructuralFlag::Clear);
        assert_eq!(flag.label(), NO_STRUCTURAL_AMBIGUITY_LABEL);
    }

    #[test]
    fn test_substring_and_case() {
        // Substring: "without" contains "with".
        assert!(detect_structural_ambiguity("left without him").is_ambiguous());
        // Case-sensitive: "With" does not.
        assert!(!detect_structural_ambiguity("With love").is_ambiguous());
    }

    #[test]
    fn test_custom_rules_first_wins() {
        let detector = StructuralDetector::new(vec![
            StructuralRule::new("and", "possible coordination ambiguity"),
            StructuralRule::attachment(),
        ]);
        let flag = detector.detect("bread and butter with jam");
        assert_eq!(flag.label(), "possible coordination ambiguity");
        assert_eq!(detector.detect("tea with lemon").label(), ATTACHMENT_AMBIGUITY_LABEL);
    }

    proptest! {
        #[test]
        fn test_flag_iff_with(sentence in "[a-z ]{0,30}") {
            let flag = detect_structural_ambiguity(&sentence);
            prop_assert_eq!(flag.is_ambiguous(), sentence.contains("with"));
        }

        #[test]
        fn test_flag_with_inserted(prefix in "[A-Za-z ]{0,12}", suffix in "[A-Za-z ]{0,12}") {
            let sentence = format!("{prefix}with{suffix}");
            prop_assert!(detect_structural_ambiguity(&sentence).is_ambiguous());
        }
    }
}
