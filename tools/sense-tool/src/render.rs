use std::fmt;

use sense_protocol::FrameSlot;
use sense_solver::Analysis;

const SLOTS: [(FrameSlot, &str); 4] = [
    (FrameSlot::Actor, "Actor"),
    (FrameSlot::Action, "Action"),
    (FrameSlot::Object, "Object"),
    (FrameSlot::Modifier, "Modifier"),
];

/// Plain-text report, one section per pipeline layer.
pub struct TextReport<'a>(pub &'a Analysis);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        writeln!(f, "Sentence: {}", analysis.sentence)?;

        writeln!(f, "\n1. Lexical disambiguation")?;
        if analysis.senses.is_empty() {
            writeln!(f, "   No lexical ambiguities found.")?;
        }
        for choice in &analysis.senses {
            writeln!(f, "   {} -> {}", choice.word, choice.sense)?;
        }

        writeln!(f, "\n2. Structural disambiguation")?;
        writeln!(f, "   {}", analysis.structural_flag.label())?;

        writeln!(f, "\n3. Semantic frame")?;
        for (slot, name) in SLOTS {
            let value = analysis.frame.get(slot).unwrap_or("-");
            writeln!(f, "   {name:<8} {value}")?;
        }

        writeln!(f, "\n4. UNL-like representation")?;
        if analysis.relations.is_empty() {
            writeln!(f, "   Unable to generate UNL representation.")?;
        }
        for relation in &analysis.relations {
            writeln!(f, "   {relation}")?;
        }

        writeln!(f, "\n5. Semantic graph")?;
        if analysis.graph.is_empty() {
            writeln!(f, "   (empty)")?;
        }
        for edge in analysis.graph.edges() {
            writeln!(f, "   {} --[{}]--> {}", edge.source, edge.label, edge.target)?;
        }
        Ok(())
    }
}

pub fn render_text(analysis: &Analysis) -> String {
    TextReport(analysis).to_string()
}
