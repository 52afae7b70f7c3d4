//! Absolute IRI values.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// An absolute IRI, validated on construction.
///
/// Used both for the `xsd:anyURI` literal kind and for the identifier
/// reference slot every polymorphic property carries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    /// Parses `text` as an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Format`] if `text` is not an absolute IRI.
    pub fn parse(text: impl Into<String>) -> Result<Self, CodecError> {
        let text = text.into();
        if sophia_iri::Iri::new(text.as_str()).is_ok() {
            Ok(Self(text))
        } else {
            Err(CodecError::format("IRI", text))
        }
    }

    /// Returns the IRI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the IRI, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iri {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_iris() {
        let iri = Iri::parse("https://example.org/notes/1").expect("valid IRI");
        assert_eq!(iri.as_str(), "https://example.org/notes/1");
        assert!(Iri::parse("urn:uuid:1b4e28ba-2fa1-11d2-883f-0016d3cca427").is_ok());
    }

    #[test]
    fn rejects_relative_references() {
        assert!(matches!(
            Iri::parse("notes/1"),
            Err(CodecError::Format { kind: "IRI", .. })
        ));
        assert!(Iri::parse("").is_err());
    }
}
