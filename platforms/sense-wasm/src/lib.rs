use wasm_bindgen::prelude::*;
use sense_lexicon::KnowledgeBase;
use sense_protocol::{Relation, SemanticFrame, SenseAssignment, StructuralFlag, TaggedToken};
use sense_solver::{Analysis, Analyzer, AnalyzerConfig, SemanticGraph};
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Flat view for the front-end: the full analysis plus ready-to-print lines.
/// A plain struct, so `serde_wasm_bindgen` hands JS an object, not a `Map`.
#[derive(Serialize)]
pub struct AnalysisReport<'a> {
    pub sentence: &'a str,
    pub tokens: &'a [TaggedToken],
    pub senses: &'a SenseAssignment,
    pub structural_flag: &'a StructuralFlag,
    pub frame: &'a SemanticFrame,
    pub relations: &'a [Relation],
    pub graph: &'a SemanticGraph,
    pub unl: Vec<String>,
    pub structural_message: &'a str,
}

impl<'a> From<&'a Analysis> for AnalysisReport<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        Self {
            sentence: &analysis.sentence,
            tokens: &analysis.tokens,
            senses: &analysis.senses,
            structural_flag: &analysis.structural_flag,
            frame: &analysis.frame,
            relations: &analysis.relations,
            graph: &analysis.graph,
            unl: analysis.unl_lines(),
            structural_message: analysis.structural_flag.label(),
        }
    }
}

/// The engine instance running in the browser
#[wasm_bindgen]
pub struct SenseEngine {
    analyzer: Analyzer,
}

#[wasm_bindgen]
impl SenseEngine {
    /// Builds an engine from a compiled lexicon (fetched by JS).
    /// The archive is validated before use.
    #[wasm_bindgen(constructor)]
    pub fn new(lexicon: Vec<u8>) -> Result<SenseEngine, JsValue> {
        let kb = KnowledgeBase::from_archive(&lexicon)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_knowledge_base(kb))
    }

    #[wasm_bindgen(js_name = withBuiltinLexicon)]
    pub fn with_builtin_lexicon() -> SenseEngine {
        Self::with_knowledge_base(KnowledgeBase::builtin())
    }

    #[wasm_bindgen(getter, js_name = lexiconSize)]
    pub fn lexicon_size(&self) -> usize {
        self.analyzer.knowledge_base().len()
    }

    /// Text -> tokens -> senses / flag -> frame -> relations -> graph, as a JS object.
    pub fn analyze(&self, input: &str) -> Result<JsValue, JsValue> {
        let analysis = self.analyzer.analyze(input);
        let report = AnalysisReport::from(&analysis);
        serde_wasm_bindgen::to_value(&report).map_err(JsValue::from)
    }
}

impl SenseEngine {
    fn with_knowledge_base(kb: KnowledgeBase) -> Self {
        Self {
            analyzer: Analyzer::new(kb, AnalyzerConfig::default()),
        }
    }

    /// Native entry point used by tests and non-JS hosts.
    pub fn analysis(&self, input: &str) -> Analysis {
        self.analyzer.analyze(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sense_lexicon::compile_lexicon;

    #[test]
    fn test_engine_from_archive() {
        let bytes = compile_lexicon(&KnowledgeBase::builtin().to_lexicon()).unwrap();
        let engine = SenseEngine::with_knowledge_base(KnowledgeBase::from_archive(&bytes).unwrap());
        assert_eq!(engine.lexicon_size(), 4);

        let analysis = engine.analysis("The bank is by the river");
        assert_eq!(analysis.senses.get("bank"), Some("river side"));
    }

    #[test]
    fn test_report_shape() {
        let engine = SenseEngine::with_builtin_lexicon();
        let analysis = engine.analysis("I saw the man with the telescope");
        let json = serde_json::to_value(AnalysisReport::from(&analysis)).unwrap();

        assert_eq!(json["unl"][0], "agt(saw,i)");
        assert_eq!(json["structural_message"], "possible attachment ambiguity");
        assert_eq!(json["frame"]["Actor"], "i");
        assert_eq!(json["sentence"], "I saw the man with the telescope");
        assert_eq!(json["senses"][0]["word"], "man");
        assert_eq!(json["relations"][2]["predicate"], "mod");
        assert_eq!(json["graph"]["edges"].as_array().map(Vec::len), Some(3));
    }
}
