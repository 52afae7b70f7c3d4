// @generated by ontogen. Do not edit.

//! Properties of the `Fixture` vocabulary.

/// `p` (functional).
///
/// Kinds, in precedence order: `string`, `Foo`.
pub mod p {
    use ontogen_runtime::literal::LiteralValue;
    use ontogen_runtime::{Aggregate, FunctionalProperty, KindValue, PropertyError};

    /// Wire key of the property.
    pub const NAME: &str = "p";
    /// Kind index of `string`.
    pub const STRING: usize = 0;
    /// Kind index of `Foo`.
    pub const FOO: usize = 1;

    /// Returns true if the property holds a `string`.
    #[must_use]
    pub fn is_string(p: &FunctionalProperty) -> bool {
        p.is_kind(STRING)
    }

    /// Returns the `string` value, if that is the kind held.
    ///
    /// The zero value of `string` is `String::new()`.
    #[must_use]
    pub fn get_string(p: &FunctionalProperty) -> Option<&String> {
        match p.get(STRING)? {
            KindValue::Literal(LiteralValue::String(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets a `string` value, replacing whatever the property held.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if the value does not fit the kind.
    pub fn set_string(p: &mut FunctionalProperty, value: String) -> Result<(), PropertyError> {
        p.set(STRING, LiteralValue::String(value))
    }

    /// Returns true if the property holds a `Foo`.
    #[must_use]
    pub fn is_foo(p: &FunctionalProperty) -> bool {
        p.is_kind(FOO)
    }

    /// Returns the `Foo` value, if that is the kind held.
    #[must_use]
    pub fn get_foo(p: &FunctionalProperty) -> Option<&Aggregate> {
        p.get(FOO)?.as_object()
    }

    /// Sets a `Foo` value, replacing whatever the property held.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if the value does not fit the kind.
    pub fn set_foo(p: &mut FunctionalProperty, value: Aggregate) -> Result<(), PropertyError> {
        p.set(FOO, value)
    }
}

/// `tags` (non-functional).
///
/// Kinds, in precedence order: `string`.
pub mod tags {
    use ontogen_runtime::literal::LiteralValue;
    use ontogen_runtime::{NonFunctionalProperty, KindValue, PropertyError};

    /// Wire key of the property.
    pub const NAME: &str = "tags";
    /// Kind index of `string`.
    pub const STRING: usize = 0;

    /// Returns true if the element at `index` is a `string`.
    #[must_use]
    pub fn is_string_at(p: &NonFunctionalProperty, index: usize) -> bool {
        p.at(index).is_some_and(|c| c.cell().is_kind(STRING))
    }

    /// Returns the `string` value at `index`, if that is the kind held there.
    ///
    /// The zero value of `string` is `String::new()`.
    #[must_use]
    pub fn get_string_at(p: &NonFunctionalProperty, index: usize) -> Option<&String> {
        match p.at(index)?.cell().get(STRING)? {
            KindValue::Literal(LiteralValue::String(v)) => Some(v),
            _ => None,
        }
    }

    /// Appends a `string` value.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if the value does not fit the kind.
    pub fn append_string(p: &mut NonFunctionalProperty, value: String) -> Result<(), PropertyError> {
        p.append(STRING, LiteralValue::String(value))
    }

    /// Prepends a `string` value.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if the value does not fit the kind.
    pub fn prepend_string(p: &mut NonFunctionalProperty, value: String) -> Result<(), PropertyError> {
        p.prepend(STRING, LiteralValue::String(value))
    }

    /// Inserts a `string` value at `index`, shifting later elements.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if `index` is past the end or the value does not fit the kind.
    pub fn insert_string_at(p: &mut NonFunctionalProperty, index: usize, value: String) -> Result<(), PropertyError> {
        p.insert_at(index, STRING, LiteralValue::String(value))
    }

    /// Replaces the element at `index` with a `string` value.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if there is no such element or the value does not fit the kind.
    pub fn set_string_at(p: &mut NonFunctionalProperty, index: usize, value: String) -> Result<(), PropertyError> {
        p.set_at(index, STRING, LiteralValue::String(value))
    }
}

/// `published` (functional).
///
/// Kinds, in precedence order: `dateTime`.
pub mod published {
    use ontogen_runtime::literal::LiteralValue;
    use ontogen_runtime::{FunctionalProperty, KindValue, PropertyError};

    /// Wire key of the property.
    pub const NAME: &str = "published";
    /// Kind index of `dateTime`.
    pub const DATE_TIME: usize = 0;

    /// Returns true if the property holds a `dateTime`.
    #[must_use]
    pub fn is_date_time(p: &FunctionalProperty) -> bool {
        p.is_kind(DATE_TIME)
    }

    /// Returns the `dateTime` value, if that is the kind held.
    ///
    /// The zero value of `dateTime` is `ontogen_runtime::chrono::DateTime::UNIX_EPOCH.fixed_offset()`.
    #[must_use]
    pub fn get_date_time(p: &FunctionalProperty) -> Option<&ontogen_runtime::chrono::DateTime<ontogen_runtime::chrono::FixedOffset>> {
        match p.get(DATE_TIME)? {
            KindValue::Literal(LiteralValue::DateTime(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets a `dateTime` value, replacing whatever the property held.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if the value does not fit the kind.
    pub fn set_date_time(p: &mut FunctionalProperty, value: ontogen_runtime::chrono::DateTime<ontogen_runtime::chrono::FixedOffset>) -> Result<(), PropertyError> {
        p.set(DATE_TIME, LiteralValue::DateTime(value))
    }
}

/// `durations` (non-functional).
///
/// Kinds, in precedence order: `duration`.
pub mod durations {
    use ontogen_runtime::literal::LiteralValue;
    use ontogen_runtime::{NonFunctionalProperty, KindValue, PropertyError};

    /// Wire key of the property.
    pub const NAME: &str = "durations";
    /// Kind index of `duration`.
    pub const DURATION: usize = 0;

    /// Returns true if the element at `index` is a `duration`.
    #[must_use]
    pub fn is_duration_at(p: &NonFunctionalProperty, index: usize) -> bool {
        p.at(index).is_some_and(|c| c.cell().is_kind(DURATION))
    }

    /// Returns the `duration` value at `index`, if that is the kind held there.
    ///
    /// The zero value of `duration` is `ontogen_runtime::chrono::Duration::zero()`.
    #[must_use]
    pub fn get_duration_at(p: &NonFunctionalProperty, index: usize) -> Option<&ontogen_runtime::chrono::Duration> {
        match p.at(index)?.cell().get(DURATION)? {
            KindValue::Literal(LiteralValue::Duration(v)) => Some(v),
            _ => None,
        }
    }

    /// Appends a `duration` value.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if the value does not fit the kind.
    pub fn append_duration(p: &mut NonFunctionalProperty, value: ontogen_runtime::chrono::Duration) -> Result<(), PropertyError> {
        p.append(DURATION, LiteralValue::Duration(value))
    }

    /// Prepends a `duration` value.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if the value does not fit the kind.
    pub fn prepend_duration(p: &mut NonFunctionalProperty, value: ontogen_runtime::chrono::Duration) -> Result<(), PropertyError> {
        p.prepend(DURATION, LiteralValue::Duration(value))
    }

    /// Inserts a `duration` value at `index`, shifting later elements.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if `index` is past the end or the value does not fit the kind.
    pub fn insert_duration_at(p: &mut NonFunctionalProperty, index: usize, value: ontogen_runtime::chrono::Duration) -> Result<(), PropertyError> {
        p.insert_at(index, DURATION, LiteralValue::Duration(value))
    }

    /// Replaces the element at `index` with a `duration` value.
    ///
    /// # Errors
    ///
    /// Returns the runtime's error if there is no such element or the value does not fit the kind.
    pub fn set_duration_at(p: &mut NonFunctionalProperty, index: usize, value: ontogen_runtime::chrono::Duration) -> Result<(), PropertyError> {
        p.set_at(index, DURATION, LiteralValue::Duration(value))
    }
}

