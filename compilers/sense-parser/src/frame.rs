use sense_protocol::{PartOfSpeech, SemanticFrame, TaggedToken};

/// Greedy single-pass frame extraction.
///
/// - Action: first verb
/// - Actor: first noun
/// - Object: second noun
/// - Modifier: last preposition (reassigned on every preposition)
///
/// Gerunds, past forms and adverbs are not slot candidates.
pub fn extract_frame(tagged: &[TaggedToken]) -> SemanticFrame {
    let mut frame = SemanticFrame::default();

    for token in tagged {
        match token.pos {
            PartOfSpeech::Verb => {
                if frame.action.is_none() {
                    frame.action = Some(token.text().to_string());
                }
            }
            PartOfSpeech::Noun => {
                if frame.actor.is_none() {
                    frame.actor = Some(token.text().to_string());
                } else if frame.object.is_none() {
                    frame.object = Some(token.text().to_string());
                }
            }
            // No "unset" guard here: a later preposition replaces an earlier one.
            PartOfSpeech::Preposition => {
                frame.modifier = Some(token.text().to_string());
            }
            PartOfSpeech::Gerund | PartOfSpeech::Past | PartOfSpeech::Adverb => {}
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sense_protocol::{FrameSlot, Span, Token};

    fn t(text: &str, pos: PartOfSpeech) -> TaggedToken {
        TaggedToken::new(Token::new(text, 0, Span::new(0, text.len())), pos)
    }

    #[test]
    fn test_simple_svo() {
        // "dogs chase cats"
        let tokens = vec![
            t("dogs", PartOfSpeech::Noun),
            t("chase", PartOfSpeech::Verb),
            t("cats", PartOfSpeech::Noun),
        ];
        let frame = extract_frame(&tokens);
        assert_eq!(frame.get(FrameSlot::Actor), Some("dogs"));
        assert_eq!(frame.get(FrameSlot::Action), Some("chase"));
        assert_eq!(frame.get(FrameSlot::Object), Some("cats"));
        assert_eq!(frame.get(FrameSlot::Modifier), None);
    }

    #[test]
    fn test_first_verb_wins() {
        let tokens = vec![
            t("i", PartOfSpeech::Noun),
            t("saw", PartOfSpeech::Verb),
            t("you", PartOfSpeech::Noun),
            t("run", PartOfSpeech::Verb),
        ];
        assert_eq!(extract_frame(&tokens).action.as_deref(), Some("saw"));
    }

    #[test]
    fn test_third_noun_is_dropped() {
        let tokens = vec![
            t("a", PartOfSpeech::Noun),
            t("b", PartOfSpeech::Noun),
            t("c", PartOfSpeech::Noun),
        ];
        let frame = extract_frame(&tokens);
        assert_eq!(frame.actor.as_deref(), Some("a"));
        assert_eq!(frame.object.as_deref(), Some("b"));
        assert!(!frame.is_complete());
    }

    #[test]
    fn test_last_preposition_wins() {
        // "sat on the bench near the river"
        let tokens = vec![
            t("sat", PartOfSpeech::Verb),
            t("on", PartOfSpeech::Preposition),
            t("bench", PartOfSpeech::Noun),
            t("near", PartOfSpeech::Preposition),
            t("river", PartOfSpeech::Noun),
        ];
        let frame = extract_frame(&tokens);
        assert_eq!(frame.modifier.as_deref(), Some("near"));
        assert_eq!(frame.actor.as_deref(), Some("bench"));
        assert_eq!(frame.object.as_deref(), Some("river"));
    }

    #[test]
    fn test_ignored_tags() {
        let tokens = vec![
            t("quickly", PartOfSpeech::Adverb),
            t("running", PartOfSpeech::Gerund),
            t("jumped", PartOfSpeech::Past),
        ];
        assert_eq!(extract_frame(&tokens), SemanticFrame::default());
    }

    #[test]
    fn test_empty_input() {
        let frame = extract_frame(&[]);
        assert_eq!(frame, SemanticFrame::default());
        assert!(!frame.is_complete());
    }

    fn any_pos() -> impl Strategy<Value = PartOfSpeech> {
        prop::sample::select(PartOfSpeech::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_slot_invariants(seq in prop::collection::vec(("[a-z]{1,6}", any_pos()), 0..16)) {
            let tokens: Vec<TaggedToken> = seq.iter().map(|(w, p)| t(w, *p)).collect();
            let frame = extract_frame(&tokens);

            let first_verb = tokens.iter().find(|t| t.pos == PartOfSpeech::Verb).map(|t| t.text());
            prop_assert_eq!(frame.action.as_deref(), first_verb);

            let nouns: Vec<&str> = tokens.iter().filter(|t| t.pos == PartOfSpeech::Noun).map(|t| t.text()).collect();
            prop_assert_eq!(frame.actor.as_deref(), nouns.first().copied());
            prop_assert_eq!(frame.object.as_deref(), nouns.get(1).copied());

            let last_prep = tokens.iter().rev().find(|t| t.pos == PartOfSpeech::Preposition).map(|t| t.text());
            prop_assert_eq!(frame.modifier.as_deref(), last_prep);
        }
    }
}
