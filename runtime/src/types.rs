//! Runtime type descriptors and the type table.
//!
//! A [`TypeTable`] is built once from a finished vocabulary model and then
//! only read. It is the capability table generated code and document
//! decoding consult to create aggregates and resolve nested class values,
//! so no process-wide registry is needed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::aggregate::Aggregate;
use crate::functional::FunctionalProperty;
use crate::literal::LiteralCodec;
use crate::sequence::NonFunctionalProperty;

/// One of the mutually exclusive kinds a property may hold.
#[derive(Debug, Clone)]
pub enum KindType {
    /// A literal kind decoded by a codec delegate.
    Literal {
        /// Kind name as declared in the vocabulary (e.g. `string`).
        name: String,
        /// Full IRI of the kind.
        uri: String,
        /// Serialize/deserialize/less table.
        codec: LiteralCodec,
    },
    /// An aggregate of another class.
    Class {
        /// Class name.
        name: String,
        /// Full IRI of the class.
        uri: String,
    },
}

impl KindType {
    /// Creates a literal kind.
    pub fn literal(name: impl Into<String>, uri: impl Into<String>, codec: LiteralCodec) -> Self {
        KindType::Literal {
            name: name.into(),
            uri: uri.into(),
            codec,
        }
    }

    /// Creates a class kind.
    pub fn class(name: impl Into<String>, uri: impl Into<String>) -> Self {
        KindType::Class {
            name: name.into(),
            uri: uri.into(),
        }
    }

    /// Returns the kind's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            KindType::Literal { name, .. } | KindType::Class { name, .. } => name,
        }
    }

    /// Returns the kind's IRI.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            KindType::Literal { uri, .. } | KindType::Class { uri, .. } => uri,
        }
    }
}

impl PartialEq for KindType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (KindType::Literal { uri: a, .. }, KindType::Literal { uri: b, .. })
            | (KindType::Class { uri: a, .. }, KindType::Class { uri: b, .. }) => {
                a == b && self.name() == other.name()
            }
            _ => false,
        }
    }
}

/// Shape of one vocabulary property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyType {
    /// Property name, the bare wire key.
    pub name: String,
    /// Base IRI of the vocabulary that governs the property.
    pub vocabulary: String,
    /// Whether the property holds at most one value.
    pub functional: bool,
    /// Declared kinds in canonical precedence order.
    pub kinds: Vec<KindType>,
}

impl PropertyType {
    /// Creates a property type.
    pub fn new(
        name: impl Into<String>,
        vocabulary: impl Into<String>,
        functional: bool,
        kinds: Vec<KindType>,
    ) -> Self {
        Self {
            name: name.into(),
            vocabulary: vocabulary.into(),
            functional,
            kinds,
        }
    }

    /// Returns the position of the kind called `name`.
    #[must_use]
    pub fn kind_position(&self, name: &str) -> Option<usize> {
        self.kinds.iter().position(|k| k.name() == name)
    }
}

/// Shape of one vocabulary class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassType {
    /// Class name, used as the wire `type`.
    pub name: String,
    /// Base IRI of the vocabulary that defines the class.
    pub vocabulary: String,
    /// Properties an instance holds, in serialization order.
    pub properties: Vec<Arc<PropertyType>>,
}

impl ClassType {
    /// Creates a class type with no properties.
    pub fn new(name: impl Into<String>, vocabulary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vocabulary: vocabulary.into(),
            properties: Vec::new(),
        }
    }

    /// Sets the class's properties.
    #[must_use]
    pub fn with_properties(mut self, properties: Vec<Arc<PropertyType>>) -> Self {
        self.properties = properties;
        self
    }
}

/// Every property and class type of one or more compiled vocabularies.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    classes: BTreeMap<String, Arc<ClassType>>,
    properties: BTreeMap<String, Arc<PropertyType>>,
}

impl TypeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property type, replacing any of the same name.
    pub fn insert_property(&mut self, property: PropertyType) -> Arc<PropertyType> {
        let property = Arc::new(property);
        self.properties
            .insert(property.name.clone(), Arc::clone(&property));
        property
    }

    /// Adds a class type, replacing any of the same name.
    pub fn insert_class(&mut self, class: ClassType) -> Arc<ClassType> {
        let class = Arc::new(class);
        self.classes.insert(class.name.clone(), Arc::clone(&class));
        class
    }

    /// Looks up a property type by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Arc<PropertyType>> {
        self.properties.get(name)
    }

    /// Looks up a class type by name.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&Arc<ClassType>> {
        self.classes.get(name)
    }

    /// Iterates over property types in name order.
    pub fn properties(&self) -> impl Iterator<Item = &Arc<PropertyType>> {
        self.properties.values()
    }

    /// Iterates over class types in name order.
    pub fn classes(&self) -> impl Iterator<Item = &Arc<ClassType>> {
        self.classes.values()
    }

    /// Creates an empty aggregate of the class called `name`.
    #[must_use]
    pub fn new_aggregate(&self, name: &str) -> Option<Aggregate> {
        self.class(name).map(|c| Aggregate::new(Arc::clone(c)))
    }

    /// Creates an empty standalone functional property called `name`.
    ///
    /// Returns `None` if the property is unknown or non-functional.
    #[must_use]
    pub fn new_functional(&self, name: &str) -> Option<FunctionalProperty> {
        self.property(name)
            .filter(|p| p.functional)
            .map(|p| FunctionalProperty::new(Arc::clone(p)))
    }

    /// Creates an empty standalone non-functional property called `name`.
    ///
    /// Returns `None` if the property is unknown or functional.
    #[must_use]
    pub fn new_non_functional(&self, name: &str) -> Option<NonFunctionalProperty> {
        self.property(name)
            .filter(|p| !p.functional)
            .map(|p| NonFunctionalProperty::new(Arc::clone(p)))
    }
}
