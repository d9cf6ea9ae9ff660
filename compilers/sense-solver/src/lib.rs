pub mod analyzer;
pub mod config;
pub mod graph;
pub mod relations;

pub use analyzer::{analyze, Analysis, Analyzer};
pub use config::{AnalyzerConfig, ConfigError};
pub use graph::{build_graph, GraphEdge, SemanticGraph};
pub use relations::to_relations;

#[cfg(test)]
mod tests {
    use super::*;
    use sense_lexicon::{disambiguate, KnowledgeBase};
    use sense_parser::{detect_structural_ambiguity, extract_frame, tag, tokenize, Tokenizer};
    use sense_protocol::{Argument, Predicate};

    #[test]
    fn test_stages_match_analyzer() {
        // 1. Run each stage by hand
        let sentence = "A bat flew over the water with the man";
        let kb = KnowledgeBase::builtin();
        let tokens = tokenize(sentence);
        let tagged = tag(&tokens);
        let senses = disambiguate(&kb, sentence, &tokens);
        let flag = detect_structural_ambiguity(sentence);
        let frame = extract_frame(&tagged);
        let relations = to_relations(&frame);
        let graph = build_graph(&relations);

        // 2. Compare with the composed pipeline
        let analysis = analyze(sentence);
        assert_eq!(analysis.tokens, tagged);
        assert_eq!(analysis.senses, senses);
        assert_eq!(analysis.structural_flag, flag);
        assert_eq!(analysis.frame, frame);
        assert_eq!(analysis.relations, relations);
        assert_eq!(analysis.graph, graph);

        // 3. "flew" is not in the verb list, so there is no frame
        assert!(analysis.relations.is_empty());
        assert_eq!(analysis.senses.get("bat"), Some("cricket equipment"));
        assert_eq!(analysis.senses.get("man"), Some("person"));
    }

    #[test]
    fn test_relation_text_round_trip() {
        let analysis = analyze("He hit the ball with the bat");
        let text = analysis.unl_lines().join("\n");
        let graph = SemanticGraph::from_relation_text(&text).unwrap();

        assert_eq!(graph, analysis.graph);
        assert_eq!(
            graph.label(&Argument::word("hit"), &Argument::word("with")),
            Some(Predicate::Modifier)
        );
    }

    #[test]
    fn test_literal_unknown_survives_relation_text() {
        let analysis = analyze("unknown saw it");
        assert_eq!(analysis.unl_lines(), vec!["agt(saw,\"unknown\")", "obj(saw,it)"]);

        let graph = SemanticGraph::from_relation_text(&analysis.unl_lines().join("\n")).unwrap();
        assert_eq!(graph, analysis.graph);
        assert!(graph.contains(&Argument::word("unknown")));
        assert!(!graph.contains(&Argument::Unset));
    }

    #[test]
    fn test_whitespace_tokens_survive_relation_text() {
        let config = AnalyzerConfig {
            tokenizer: Tokenizer::Whitespace,
            ..AnalyzerConfig::default()
        };
        let analysis = Analyzer::new(KnowledgeBase::builtin(), config).analyze("I saw cats,dogs");
        assert_eq!(analysis.unl_lines(), vec!["agt(saw,i)", "obj(saw,\"cats,dogs\")"]);

        let graph = SemanticGraph::from_relation_text(&analysis.unl_lines().join("\n")).unwrap();
        assert_eq!(graph, analysis.graph);
        assert_eq!(
            graph.label(&Argument::word("saw"), &Argument::word("cats,dogs")),
            Some(Predicate::Object)
        );
    }
}
