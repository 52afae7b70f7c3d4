//! Per-member parse results.

use serde_json::{Map, Value};

use crate::model::Cardinality;
use crate::term::{Marker, Reference, Relation};

/// Everything the parser recorded about one schema member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDraft {
    /// The member's `@id`, as written.
    pub id: Option<String>,
    /// Local name derived from `id`.
    pub name: Option<String>,
    /// Full IRI derived from `id`.
    pub uri: Option<String>,
    /// Recognized type markers, first-seen order.
    pub markers: Vec<Marker>,
    /// Types that are not markers, as written.
    pub other_types: Vec<String>,
    /// Label annotation.
    pub label: Option<String>,
    /// Comment annotation.
    pub comment: Option<String>,
    /// Related links.
    pub see_also: Vec<String>,
    /// `rdfs:domain` references.
    pub domain: Vec<Reference>,
    /// `rdfs:range` references, in declaration order.
    pub range: Vec<Reference>,
    /// `rdfs:subClassOf` references.
    pub sub_class_of: Vec<Reference>,
    /// `owl:disjointWith` references.
    pub disjoint_with: Vec<Reference>,
    /// Explicit cardinality, if given.
    pub cardinality: Option<Cardinality>,
    /// Examples, verbatim.
    pub examples: Vec<Value>,
    /// Keys no registered term claimed.
    pub unknown: Map<String, Value>,
}

impl NodeDraft {
    /// Appends references to the list `relation` targets.
    pub fn push_references(&mut self, relation: Relation, references: Vec<Reference>) {
        let target = match relation {
            Relation::Domain => &mut self.domain,
            Relation::Range => &mut self.range,
            Relation::SubClassOf => &mut self.sub_class_of,
            Relation::DisjointWith => &mut self.disjoint_with,
            Relation::UnionOf | Relation::EquivalentClass => return,
        };
        target.extend(references);
    }

    /// Returns true if the member carries `marker`.
    #[must_use]
    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// Returns true if the member declares a class.
    #[must_use]
    pub fn is_class(&self) -> bool {
        self.has_marker(Marker::Class)
    }

    /// Returns true if the member declares a property.
    #[must_use]
    pub fn is_property(&self) -> bool {
        self.has_marker(Marker::Property) || self.has_marker(Marker::Functional)
    }

    /// Returns true if the member declares a local datatype.
    #[must_use]
    pub fn is_datatype(&self) -> bool {
        self.has_marker(Marker::Datatype)
    }
}
