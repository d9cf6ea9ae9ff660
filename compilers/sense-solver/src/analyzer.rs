use std::sync::OnceLock;

use sense_lexicon::{Disambiguator, KnowledgeBase, TriggerMatching, TriggerRule};
use sense_parser::{extract_frame, StructuralDetector, Tagger, Tokenizer};
use sense_protocol::{Relation, SemanticFrame, SenseAssignment, StructuralFlag, TaggedToken};
use serde::Serialize;
use tracing::{debug, debug_span};

use crate::config::AnalyzerConfig;
use crate::graph::{build_graph, SemanticGraph};
use crate::relations::to_relations;

/// Everything the pipeline derives from one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub sentence: String,
    pub tokens: Vec<TaggedToken>,
    pub senses: SenseAssignment,
    pub structural_flag: StructuralFlag,
    pub frame: SemanticFrame,
    /// Empty when no frame could be derived (no verb).
    pub relations: Vec<Relation>,
    pub graph: SemanticGraph,
}

impl Analysis {
    /// Relations in their `pred(arg1,arg2)` text form.
    pub fn unl_lines(&self) -> Vec<String> {
        self.relations.iter().map(ToString::to_string).collect()
    }
}

/// Text → tokens → (tags, senses, structural flag) → frame → relations → graph.
///
/// Holds only immutable rule tables, so one analyzer can serve any number
/// of threads; `analyze` keeps no state between calls.
#[derive(Debug, Clone)]
pub struct Analyzer {
    kb: KnowledgeBase,
    tokenizer: Tokenizer,
    tagger: Tagger,
    trigger_rules: Vec<TriggerRule>,
    trigger_matching: TriggerMatching,
    detector: StructuralDetector,
}

impl Analyzer {
    pub fn new(kb: KnowledgeBase, config: AnalyzerConfig) -> Self {
        Self {
            kb,
            tokenizer: config.tokenizer,
            tagger: Tagger::with_extra_words(
                config.extra_verbs.as_slice(),
                config.extra_prepositions.as_slice(),
            ),
            trigger_rules: config.trigger_rules,
            trigger_matching: config.trigger_matching,
            detector: StructuralDetector::new(config.structural_rules),
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn analyze(&self, sentence: &str) -> Analysis {
        let span = debug_span!("analyze", bytes = sentence.len());
        let _enter = span.enter();

        let tokens = self.tokenizer.tokenize(sentence);
        let tagged = self.tagger.tag(&tokens);

        let senses = Disambiguator::new(&self.kb, &self.trigger_rules)
            .with_matching(self.trigger_matching)
            .disambiguate(sentence, &tokens);
        let structural_flag = self.detector.detect(sentence);

        let frame = extract_frame(&tagged);
        let relations = to_relations(&frame);
        let graph = build_graph(&relations);

        debug!(
            tokens = tagged.len(),
            senses = senses.len(),
            ambiguous = structural_flag.is_ambiguous(),
            complete = frame.is_complete(),
            relations = relations.len(),
            "Analyzed sentence"
        );

        Analysis {
            sentence: sentence.to_string(),
            tokens: tagged,
            senses,
            structural_flag,
            frame,
            relations,
            graph,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin(), AnalyzerConfig::default())
    }
}

/// Analyzes with the built-in lexicon and default rules.
pub fn analyze(sentence: &str) -> Analysis {
    static DEFAULT: OnceLock<Analyzer> = OnceLock::new();
    DEFAULT.get_or_init(Analyzer::default).analyze(sentence)
}
