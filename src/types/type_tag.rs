//! Content type discriminator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Selects the encoding template and payload shape of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Url,
    Text,
    Email,
    Phone,
    Sms,
    Wifi,
    Vcard,
    Geolocation,
}

impl TypeTag {
    /// Every supported tag, in declaration order
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Url,
        TypeTag::Text,
        TypeTag::Email,
        TypeTag::Phone,
        TypeTag::Sms,
        TypeTag::Wifi,
        TypeTag::Vcard,
        TypeTag::Geolocation,
    ];

    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Url => "url",
            TypeTag::Text => "text",
            TypeTag::Email => "email",
            TypeTag::Phone => "phone",
            TypeTag::Sms => "sms",
            TypeTag::Wifi => "wifi",
            TypeTag::Vcard => "vcard",
            TypeTag::Geolocation => "geolocation",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag '{0}'")]
pub struct UnknownTypeTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // The wire format only ever uses lowercase names
        assert!("URL".parse::<TypeTag>().is_err());
        assert!("barcode".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TypeTag::Geolocation).unwrap();
        assert_eq!(json, "\"geolocation\"");

        let tag: TypeTag = serde_json::from_str("\"vcard\"").unwrap();
        assert_eq!(tag, TypeTag::Vcard);
    }
}
