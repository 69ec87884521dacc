use serde_json::Value;
use validator::Validate;

use crate::domain::amenity::{Amenity, NewAmenity, UpdateAmenity};
use crate::forms::FormError;

#[derive(Clone, Debug, Default, Validate)]
/// Draft state of the amenity create/edit panel.
pub struct AmenityForm {
    /// Set when editing an existing amenity.
    pub id: Option<String>,
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "label is required"))]
    pub label: String,
    /// Raw JSON text of the props editor; empty means no props.
    pub props_json: String,
}

impl AmenityForm {
    /// Seeds the panel from an existing amenity for editing.
    pub fn from_amenity(amenity: &Amenity) -> Self {
        Self {
            id: Some(amenity.id.clone()),
            code: amenity.code.clone(),
            label: amenity.label.clone(),
            props_json: amenity
                .props
                .as_ref()
                .and_then(|props| serde_json::to_string_pretty(props).ok())
                .unwrap_or_default(),
        }
    }

    /// Parses the props editor text. Empty text maps to `None` (no props);
    /// anything else must be valid JSON or the submission is rejected here.
    pub fn parse_props(&self) -> Result<Option<Value>, FormError> {
        let trimmed = self.props_json.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(trimmed)
            .map(Some)
            .map_err(|e| FormError::Invalid(format!("props must be valid JSON: {e}")))
    }

    pub fn to_new_amenity(&self) -> Result<NewAmenity, FormError> {
        self.validate()?;
        let props = self.parse_props()?;
        Ok(NewAmenity::new(self.code.clone(), self.label.clone(), props))
    }

    pub fn to_update_amenity(&self) -> Result<UpdateAmenity, FormError> {
        self.validate()?;
        let props = self.parse_props()?;
        Ok(UpdateAmenity::new(
            self.code.clone(),
            self.label.clone(),
            props,
        ))
    }
}
