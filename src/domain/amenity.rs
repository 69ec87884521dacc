use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bookable property amenity, e.g. `sauna` or `ski-storage`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Amenity {
    pub id: String,
    /// Unique slug-like code.
    pub code: String,
    pub label: String,
    /// Free-form properties; the client treats them as opaque JSON.
    #[serde(default)]
    pub props: Option<Value>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewAmenity {
    pub code: String,
    pub label: String,
    /// Omitted from the request body when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
}

impl NewAmenity {
    #[must_use]
    pub fn new(code: String, label: String, props: Option<Value>) -> Self {
        Self {
            code: code.trim().to_string(),
            label: label.trim().to_string(),
            props,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct UpdateAmenity {
    pub code: String,
    pub label: String,
    /// `null` clears the stored props on the server.
    pub props: Option<Value>,
}

impl UpdateAmenity {
    #[must_use]
    pub fn new(code: String, label: String, props: Option<Value>) -> Self {
        Self {
            code: code.trim().to_string(),
            label: label.trim().to_string(),
            props,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_omits_absent_props() {
        let body = serde_json::to_value(NewAmenity::new("ski".into(), "Ski".into(), None))
            .expect("serializes");
        assert!(body.get("props").is_none());
    }

    #[test]
    fn update_body_sends_null_to_clear_props() {
        let body = serde_json::to_value(UpdateAmenity::new("ski".into(), "Ski".into(), None))
            .expect("serializes");
        assert_eq!(body.get("props"), Some(&Value::Null));
    }
}
