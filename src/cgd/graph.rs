use indexmap::{IndexMap, IndexSet};

use crate::types::{Curie, Label, NodeId, ProteinPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Class,
    Individual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: Option<Label>,
    pub kind: NodeKind,
    // types accumulate when the same node is added again with another type
    pub types: IndexSet<Curie>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: NodeId,
    pub predicate: Curie,
    pub object: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLocation {
    pub position: ProteinPosition,
    pub reference: NodeId,
}

/// A located sequence feature.  A missense substitution starts and ends at
/// the same residue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionFeature {
    pub id: NodeId,
    pub label: Label,
    pub feature_type: Curie,
    pub begin: FeatureLocation,
    pub end: FeatureLocation,
}

/// A subject/relation/object claim backed by a citation and an evidence
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub id: NodeId,
    pub subject: NodeId,
    pub relation: Curie,
    pub object: NodeId,
    pub source: Curie,
    pub evidence: Curie,
}

/// Where the mappers write entities and edges.  Adding something that is
/// already present must merge with it, not duplicate it.
pub trait GraphSink {
    fn add_class(&mut self, id: &str, label: Option<&str>);
    fn add_individual(&mut self, id: &str, label: Option<&str>, type_id: &str);
    fn add_object_property(&mut self, label: &str, id: &str);
    fn add_triple(&mut self, subject: &str, predicate: &str, object: &str);
    fn add_position_feature(&mut self, feature: PositionFeature);
    fn add_association(&mut self, association: Association);
}

/// An append only, in-memory graph.  Iteration follows first insertion
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryGraph {
    nodes: IndexMap<NodeId, Node>,
    object_properties: IndexMap<Label, Curie>,
    triples: IndexSet<Triple>,
    features: IndexMap<NodeId, PositionFeature>,
    associations: IndexMap<NodeId, Association>,
}

impl MemoryGraph {
    pub fn new() -> MemoryGraph {
        MemoryGraph::default()
    }

    fn add_node(&mut self, id: &str, label: Option<&str>, kind: NodeKind,
                type_id: Option<&str>) {
        let node = self.nodes.entry(id.into())
            .or_insert_with(|| Node {
                id: id.into(),
                label: None,
                kind,
                types: IndexSet::new(),
            });

        if node.label.is_none() {
            node.label = label.map(Label::from);
        }

        if let Some(type_id) = type_id {
            node.types.insert(type_id.into());
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn object_properties(&self) -> impl Iterator<Item = (&Label, &Curie)> {
        self.object_properties.iter()
    }

    pub fn object_property(&self, label: &str) -> Option<&Curie> {
        self.object_properties.get(label)
    }

    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    pub fn has_triple(&self, subject: &str, predicate: &str, object: &str) -> bool {
        let triple = Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        };
        self.triples.contains(&triple)
    }

    pub fn objects_of(&self, subject: &str, predicate: &str) -> Vec<&NodeId> {
        self.triples.iter()
            .filter(|triple| &*triple.subject == subject && &*triple.predicate == predicate)
            .map(|triple| &triple.object)
            .collect()
    }

    pub fn features(&self) -> impl Iterator<Item = &PositionFeature> {
        self.features.values()
    }

    pub fn feature(&self, id: &str) -> Option<&PositionFeature> {
        self.features.get(id)
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn associations(&self) -> impl Iterator<Item = &Association> {
        self.associations.values()
    }

    pub fn association_count(&self) -> usize {
        self.associations.len()
    }
}

impl GraphSink for MemoryGraph {
    fn add_class(&mut self, id: &str, label: Option<&str>) {
        self.add_node(id, label, NodeKind::Class, None);
    }

    fn add_individual(&mut self, id: &str, label: Option<&str>, type_id: &str) {
        self.add_node(id, label, NodeKind::Individual, Some(type_id));
    }

    fn add_object_property(&mut self, label: &str, id: &str) {
        self.object_properties.entry(label.into())
            .or_insert_with(|| id.into());
    }

    fn add_triple(&mut self, subject: &str, predicate: &str, object: &str) {
        self.triples.insert(Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        });
    }

    fn add_position_feature(&mut self, feature: PositionFeature) {
        self.features.entry(feature.id.clone())
            .or_insert(feature);
    }

    fn add_association(&mut self, association: Association) {
        self.associations.entry(association.id.clone())
            .or_insert(association);
    }
}
