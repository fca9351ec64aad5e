//! Content encoder
//!
//! Turns a `(type, payload)` pair into the canonical string that gets drawn
//! into the QR symbol. Validation happens once, in [`Payload::parse`]; after
//! that, encoding a [`Payload`] cannot fail.
//!
//! Formats:
//!
//! | type          | content                                               |
//! |---------------|-------------------------------------------------------|
//! | `url`, `text` | payload verbatim                                      |
//! | `email`       | `mailto:{payload}`                                    |
//! | `phone`       | `tel:{payload}`                                       |
//! | `sms`         | `sms:{phone}` (message is not embedded)               |
//! | `wifi`        | `WIFI:T:{encryption};S:{ssid};P:{password};;`         |
//! | `vcard`       | vCard 3.0 block, newline-joined, no escaping          |
//! | `geolocation` | `geo:{latitude},{longitude}`                          |

mod parse;

use serde_json::Value;

use crate::types::{ContactCard, EncodedContent, Payload, TypeTag};

/// Rejected request input. Always a client error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("invalid QR code type '{0}'")]
    InvalidType(String),

    #[error("invalid {type_tag} payload: {reason}")]
    InvalidPayload { type_tag: TypeTag, reason: String },

    #[error("invalid option '{option}': {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
}

/// Validate and encode a raw request in one step
pub fn encode(type_tag: &str, payload: &Value) -> Result<EncodedContent, ValidationError> {
    Payload::parse(type_tag, payload).map(|p| p.encode())
}

impl Payload {
    /// Render the canonical content string for this payload
    pub fn encode(&self) -> EncodedContent {
        let content = match self {
            Payload::Url(value) | Payload::Text(value) => value.clone(),
            Payload::Email(address) => format!("mailto:{}", address),
            Payload::Phone(number) => format!("tel:{}", number),
            Payload::Sms(target) => format!("sms:{}", target.phone),
            Payload::Wifi(wifi) => format!(
                "WIFI:T:{};S:{};P:{};;",
                wifi.encryption, wifi.ssid, wifi.password
            ),
            Payload::Vcard(card) => vcard(card),
            Payload::Geolocation(point) => {
                format!("geo:{},{}", point.latitude, point.longitude)
            }
        };

        EncodedContent::new(content)
    }
}

fn vcard(card: &ContactCard) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", card.name),
        format!("TEL:{}", card.phone),
        format!("EMAIL:{}", card.email),
        format!("ORG:{}", card.company),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enc(type_tag: &str, payload: Value) -> String {
        encode(type_tag, &payload).unwrap().into_string()
    }

    #[test]
    fn test_scalar_types() {
        assert_eq!(enc("url", json!("https://example.com")), "https://example.com");
        assert_eq!(enc("text", json!("hello world")), "hello world");
        assert_eq!(enc("email", json!("a@b.co")), "mailto:a@b.co");
        assert_eq!(enc("phone", json!("+15551234")), "tel:+15551234");
    }

    #[test]
    fn test_sms_encodes_phone_only() {
        assert_eq!(
            enc("sms", json!({"phone": "+15551234", "message": "hi there"})),
            "sms:+15551234"
        );
        assert_eq!(enc("sms", json!("+15551234")), "sms:+15551234");
    }

    #[test]
    fn test_wifi() {
        assert_eq!(
            enc(
                "wifi",
                json!({"ssid": "Home", "password": "secret", "encryption": "WPA"})
            ),
            "WIFI:T:WPA;S:Home;P:secret;;"
        );
        assert_eq!(
            enc("wifi", json!({"ssid": "Cafe", "password": "latte", "encryption": "WEP"})),
            "WIFI:T:WEP;S:Cafe;P:latte;;"
        );
    }

    #[test]
    fn test_wifi_defaults_to_wpa() {
        assert_eq!(
            enc("wifi", json!({"ssid": "Home", "password": "secret"})),
            "WIFI:T:WPA;S:Home;P:secret;;"
        );
        assert_eq!(
            enc("wifi", json!({"ssid": "Home", "password": "secret", "encryption": ""})),
            "WIFI:T:WPA;S:Home;P:secret;;"
        );
    }

    #[test]
    fn test_vcard() {
        let content = enc(
            "vcard",
            json!({
                "name": "Ada Lovelace",
                "phone": "+44 20 7946 0000",
                "email": "ada@example.org",
                "company": "Analytical Engines"
            }),
        );
        assert_eq!(
            content,
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nTEL:+44 20 7946 0000\n\
             EMAIL:ada@example.org\nORG:Analytical Engines\nEND:VCARD"
        );
    }

    #[test]
    fn test_vcard_without_company_has_empty_org_line() {
        let content = enc(
            "vcard",
            json!({"name": "Bob", "phone": "123", "email": "bob@example.com"}),
        );
        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], "ORG:");
        assert_eq!(lines[6], "END:VCARD");

        let explicit_empty = enc(
            "vcard",
            json!({"name": "Bob", "phone": "123", "email": "bob@example.com", "company": ""}),
        );
        assert_eq!(explicit_empty, content);
    }

    #[test]
    fn test_vcard_does_not_escape() {
        let content = enc(
            "vcard",
            json!({"name": "Doe; John", "phone": "1", "email": "j@d.com", "company": "A,B"}),
        );
        assert!(content.contains("FN:Doe; John\n"));
        assert!(content.contains("ORG:A,B\n"));
    }

    #[test]
    fn test_geolocation() {
        assert_eq!(
            enc("geolocation", json!({"latitude": "40.7128", "longitude": "-74.0060"})),
            "geo:40.7128,-74.0060"
        );
        assert_eq!(
            enc("geolocation", json!({"latitude": 51.5, "longitude": -0.12})),
            "geo:51.5,-0.12"
        );
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let payload = json!({"ssid": "Net", "password": "pw"});
        assert_eq!(encode("wifi", &payload), encode("wifi", &payload));
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            encode("barcode", &json!("x")),
            Err(ValidationError::InvalidType("barcode".to_string()))
        );
    }

    #[test]
    fn test_missing_type_or_payload() {
        assert_eq!(
            encode("", &json!("x")),
            Err(ValidationError::MissingField("type".to_string()))
        );
        assert_eq!(
            encode("url", &Value::Null),
            Err(ValidationError::MissingField("payload".to_string()))
        );
        assert_eq!(
            encode("text", &json!("")),
            Err(ValidationError::MissingField("payload".to_string()))
        );
    }
}
