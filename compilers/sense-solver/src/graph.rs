use std::collections::HashMap;

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use sense_parser::{parse_relations, RelationParseError};
use sense_protocol::{Argument, Predicate, Relation};
use serde::{Serialize, Serializer};

/// One labeled edge, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: Argument,
    pub target: Argument,
    pub label: Predicate,
}

/// Directed relation graph. Nodes are distinct arguments; at most one edge
/// per ordered (source, target) pair.
#[derive(Debug, Clone, Default)]
pub struct SemanticGraph {
    graph: DiGraph<Argument, Predicate>,
    index_map: HashMap<Argument, NodeIndex>,
}

impl SemanticGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_relations<'a>(relations: impl IntoIterator<Item = &'a Relation>) -> Self {
        let mut graph = Self::new();
        for relation in relations {
            graph.add_relation(relation);
        }
        graph
    }

    /// Builds a graph from `pred(arg1,arg2)` lines.
    pub fn from_relation_text(text: &str) -> Result<Self, RelationParseError> {
        let relations = parse_relations(text)?;
        Ok(Self::from_relations(&relations))
    }

    fn node(&mut self, argument: &Argument) -> NodeIndex {
        if let Some(&idx) = self.index_map.get(argument) {
            return idx;
        }
        let idx = self.graph.add_node(argument.clone());
        self.index_map.insert(argument.clone(), idx);
        idx
    }

    /// Adds `source → target`. An existing edge on the same pair keeps its
    /// position but takes the new label.
    pub fn add_relation(&mut self, relation: &Relation) {
        let from = self.node(&relation.source);
        let to = self.node(&relation.target);
        self.graph.update_edge(from, to, relation.predicate);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, argument: &Argument) -> bool {
        self.index_map.contains_key(argument)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Argument> {
        self.graph.node_weights()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .map(|edge| GraphEdge {
                source: self.graph[edge.source()].clone(),
                target: self.graph[edge.target()].clone(),
                label: *edge.weight(),
            })
            .collect()
    }

    pub fn label(&self, source: &Argument, target: &Argument) -> Option<Predicate> {
        let from = *self.index_map.get(source)?;
        let to = *self.index_map.get(target)?;
        self.graph
            .find_edge(from, to)
            .map(|edge| self.graph[edge])
    }

    /// Graphviz description for external renderers.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }
}

impl PartialEq for SemanticGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes()) && self.edges() == other.edges()
    }
}

impl Eq for SemanticGraph {}

#[derive(Serialize)]
struct GraphView<'a> {
    nodes: Vec<&'a Argument>,
    edges: Vec<GraphEdge>,
}

impl Serialize for SemanticGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphView {
            nodes: self.nodes().collect(),
            edges: self.edges(),
        }
        .serialize(serializer)
    }
}

pub fn build_graph(relations: &[Relation]) -> SemanticGraph {
    SemanticGraph::from_relations(relations)
}
