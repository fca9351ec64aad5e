//! Typed request payloads, one variant per content type

use serde::{Deserialize, Serialize};

use super::TypeTag;

/// Wireless network credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
    /// Authentication scheme, "WPA" unless specified
    pub encryption: String,
}

/// Contact card fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Optional; an empty string yields an empty ORG line
    #[serde(default)]
    pub company: String,
}

/// Latitude/longitude pair, kept textual so the caller's precision survives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: String,
    pub longitude: String,
}

/// SMS recipient. The message body is accepted but never encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsTarget {
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A validated payload. Construct through `Payload::parse` so required
/// fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Url(String),
    Text(String),
    Email(String),
    Phone(String),
    Sms(SmsTarget),
    Wifi(WifiCredentials),
    Vcard(ContactCard),
    Geolocation(GeoPoint),
}

impl Payload {
    /// Tag that selects this payload's template
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Payload::Url(_) => TypeTag::Url,
            Payload::Text(_) => TypeTag::Text,
            Payload::Email(_) => TypeTag::Email,
            Payload::Phone(_) => TypeTag::Phone,
            Payload::Sms(_) => TypeTag::Sms,
            Payload::Wifi(_) => TypeTag::Wifi,
            Payload::Vcard(_) => TypeTag::Vcard,
            Payload::Geolocation(_) => TypeTag::Geolocation,
        }
    }
}
