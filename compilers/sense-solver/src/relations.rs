use sense_protocol::{Argument, Predicate, Relation, SemanticFrame};

/// Frame → UNL-style relations.
///
/// No action, no relations. Otherwise `agt` and `obj` are always emitted
/// (unset slots become [`Argument::Unset`]) and `mod` only when the
/// modifier is set.
pub fn to_relations(frame: &SemanticFrame) -> Vec<Relation> {
    let Some(action) = frame.action.as_deref() else {
        return Vec::new();
    };
    let head = Argument::word(action);

    let mut relations = vec![
        Relation::new(Predicate::Agent, head.clone(), frame.actor.as_deref().into()),
        Relation::new(Predicate::Object, head.clone(), frame.object.as_deref().into()),
    ];
    if let Some(modifier) = frame.modifier.as_deref() {
        relations.push(Relation::new(Predicate::Modifier, head, Argument::word(modifier)));
    }

    relations
}
