// @generated by ontogen. Do not edit.

//! Classes of the `Fixture` vocabulary.

/// `Foo`: A foo.
pub mod foo {
    use ontogen_runtime::{Aggregate, FunctionalProperty, NonFunctionalProperty, TypeTable};

    /// Wire `type` of the class.
    pub const NAME: &str = "Foo";

    /// Creates an empty `Foo`.
    ///
    /// Returns `None` if `table` was not built from this vocabulary.
    #[must_use]
    pub fn new(table: &TypeTable) -> Option<Aggregate> {
        table.new_aggregate(NAME)
    }

    /// Borrows the `p` property.
    #[must_use]
    pub fn p(value: &Aggregate) -> Option<&FunctionalProperty> {
        value.functional("p")
    }

    /// Mutably borrows the `p` property.
    pub fn p_mut(value: &mut Aggregate) -> Option<&mut FunctionalProperty> {
        value.functional_mut("p")
    }

    /// Borrows the `tags` property.
    #[must_use]
    pub fn tags(value: &Aggregate) -> Option<&NonFunctionalProperty> {
        value.non_functional("tags")
    }

    /// Mutably borrows the `tags` property.
    pub fn tags_mut(value: &mut Aggregate) -> Option<&mut NonFunctionalProperty> {
        value.non_functional_mut("tags")
    }

    /// Borrows the `published` property.
    #[must_use]
    pub fn published(value: &Aggregate) -> Option<&FunctionalProperty> {
        value.functional("published")
    }

    /// Mutably borrows the `published` property.
    pub fn published_mut(value: &mut Aggregate) -> Option<&mut FunctionalProperty> {
        value.functional_mut("published")
    }

    /// Borrows the `durations` property.
    #[must_use]
    pub fn durations(value: &Aggregate) -> Option<&NonFunctionalProperty> {
        value.non_functional("durations")
    }

    /// Mutably borrows the `durations` property.
    pub fn durations_mut(value: &mut Aggregate) -> Option<&mut NonFunctionalProperty> {
        value.non_functional_mut("durations")
    }
}

