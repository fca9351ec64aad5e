//! Boundary validation: raw JSON payload to typed [`Payload`]

use serde_json::{Map, Value};

use super::ValidationError;
use crate::types::{ContactCard, GeoPoint, Payload, SmsTarget, TypeTag, WifiCredentials};

const DEFAULT_ENCRYPTION: &str = "WPA";

impl Payload {
    /// Check the type tag and payload shape, producing a typed payload.
    ///
    /// Every required field is checked here, so missing data surfaces as a
    /// single `ValidationError` before any encoding or rendering happens.
    pub fn parse(type_tag: &str, raw: &Value) -> Result<Payload, ValidationError> {
        let type_tag = type_tag.trim();
        if type_tag.is_empty() {
            return Err(ValidationError::MissingField("type".to_string()));
        }
        if is_blank(raw) {
            return Err(ValidationError::MissingField("payload".to_string()));
        }

        let tag: TypeTag = type_tag
            .parse()
            .map_err(|_| ValidationError::InvalidType(type_tag.to_string()))?;

        match tag {
            TypeTag::Url => scalar(tag, raw).map(Payload::Url),
            TypeTag::Text => scalar(tag, raw).map(Payload::Text),
            TypeTag::Email => scalar(tag, raw).map(Payload::Email),
            TypeTag::Phone => scalar(tag, raw).map(Payload::Phone),
            TypeTag::Sms => parse_sms(raw),
            TypeTag::Wifi => {
                let fields = record(tag, raw)?;
                Ok(Payload::Wifi(WifiCredentials {
                    ssid: required(fields, tag, "ssid")?,
                    password: required(fields, tag, "password")?,
                    encryption: optional(fields, tag, "encryption")?
                        .unwrap_or_else(|| DEFAULT_ENCRYPTION.to_string()),
                }))
            }
            TypeTag::Vcard => {
                let fields = record(tag, raw)?;
                Ok(Payload::Vcard(ContactCard {
                    name: required(fields, tag, "name")?,
                    phone: required(fields, tag, "phone")?,
                    email: required(fields, tag, "email")?,
                    company: optional(fields, tag, "company")?.unwrap_or_default(),
                }))
            }
            TypeTag::Geolocation => {
                let fields = record(tag, raw)?;
                Ok(Payload::Geolocation(GeoPoint {
                    latitude: required(fields, tag, "latitude")?,
                    longitude: required(fields, tag, "longitude")?,
                }))
            }
        }
    }
}

fn parse_sms(raw: &Value) -> Result<Payload, ValidationError> {
    // Older clients send the bare number
    if let Some(phone) = text(raw) {
        return Ok(Payload::Sms(SmsTarget {
            phone,
            message: None,
        }));
    }

    let fields = record(TypeTag::Sms, raw)?;
    Ok(Payload::Sms(SmsTarget {
        phone: required(fields, TypeTag::Sms, "phone")?,
        message: optional(fields, TypeTag::Sms, "message")?,
    }))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Strings pass through; numbers use their JSON text
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalar(tag: TypeTag, raw: &Value) -> Result<String, ValidationError> {
    text(raw).ok_or_else(|| ValidationError::InvalidPayload {
        type_tag: tag,
        reason: "expected a string".to_string(),
    })
}

fn record(tag: TypeTag, raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    raw.as_object().ok_or_else(|| ValidationError::InvalidPayload {
        type_tag: tag,
        reason: "expected an object".to_string(),
    })
}

fn optional(
    fields: &Map<String, Value>,
    tag: TypeTag,
    name: &str,
) -> Result<Option<String>, ValidationError> {
    match fields.get(name) {
        None => Ok(None),
        Some(value) if is_blank(value) => Ok(None),
        Some(value) => text(value).map(Some).ok_or_else(|| ValidationError::InvalidPayload {
            type_tag: tag,
            reason: format!("field '{}' must be a string", name),
        }),
    }
}

fn required(
    fields: &Map<String, Value>,
    tag: TypeTag,
    name: &str,
) -> Result<String, ValidationError> {
    optional(fields, tag, name)?.ok_or_else(|| ValidationError::MissingField(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_typed_variants() {
        let payload = Payload::parse("wifi", &json!({"ssid": "Home", "password": "pw"})).unwrap();
        assert_eq!(
            payload,
            Payload::Wifi(WifiCredentials {
                ssid: "Home".to_string(),
                password: "pw".to_string(),
                encryption: "WPA".to_string(),
            })
        );
        assert_eq!(payload.type_tag(), TypeTag::Wifi);
    }

    #[test]
    fn test_type_is_trimmed() {
        assert!(matches!(
            Payload::parse(" url ", &json!("https://x.y")),
            Ok(Payload::Url(_))
        ));
        assert_eq!(
            Payload::parse("   ", &json!("x")),
            Err(ValidationError::MissingField("type".to_string()))
        );
    }

    #[test]
    fn test_missing_required_fields() {
        assert_eq!(
            Payload::parse("wifi", &json!({"ssid": "Home"})),
            Err(ValidationError::MissingField("password".to_string()))
        );
        assert_eq!(
            Payload::parse("vcard", &json!({"name": "A", "phone": "", "email": "e"})),
            Err(ValidationError::MissingField("phone".to_string()))
        );
        assert_eq!(
            Payload::parse("geolocation", &json!({"latitude": "1"})),
            Err(ValidationError::MissingField("longitude".to_string()))
        );
        assert_eq!(
            Payload::parse("sms", &json!({"message": "hi"})),
            Err(ValidationError::MissingField("phone".to_string()))
        );
    }

    #[test]
    fn test_shape_mismatch() {
        assert!(matches!(
            Payload::parse("wifi", &json!("Home")),
            Err(ValidationError::InvalidPayload { type_tag: TypeTag::Wifi, .. })
        ));
        assert!(matches!(
            Payload::parse("url", &json!({"href": "x"})),
            Err(ValidationError::InvalidPayload { type_tag: TypeTag::Url, .. })
        ));
        assert!(matches!(
            Payload::parse("vcard", &json!({"name": ["A"], "phone": "1", "email": "e"})),
            Err(ValidationError::InvalidPayload { type_tag: TypeTag::Vcard, .. })
        ));
    }

    #[test]
    fn test_sms_keeps_message() {
        let payload = Payload::parse("sms", &json!({"phone": "123", "message": "hello"})).unwrap();
        match payload {
            Payload::Sms(target) => assert_eq!(target.message.as_deref(), Some("hello")),
            other => panic!("unexpected payload {:?}", other),
        }
    }
}
