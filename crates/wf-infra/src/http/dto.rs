//! Wire shapes that differ from the domain types.

use serde::Deserialize;
use wf_core::ports::PhoneLookup;

#[derive(Debug, Deserialize)]
pub(crate) struct PhoneLookupDto {
    pub exists: bool,
    #[serde(default, alias = "guardName", alias = "fullName")]
    pub name: Option<String>,
}

impl From<PhoneLookupDto> for PhoneLookup {
    fn from(dto: PhoneLookupDto) -> Self {
        PhoneLookup {
            exists: dto.exists,
            name: dto.name.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// List endpoints answer either with a bare array or `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) | ListEnvelope::Wrapped { data: items } => items,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::directory::Area;

    #[test]
    fn list_envelope_accepts_both_shapes() {
        let bare: ListEnvelope<Area> =
            serde_json::from_str(r#"[{"id":"a1","name":"North"}]"#).unwrap();
        let wrapped: ListEnvelope<Area> =
            serde_json::from_str(r#"{"data":[{"id":"a1","name":"North"}]}"#).unwrap();

        assert_eq!(bare.into_vec(), wrapped.into_vec());
    }

    #[test]
    fn blank_owner_name_is_dropped() {
        let dto: PhoneLookupDto = serde_json::from_str(r#"{"exists":true,"name":" "}"#).unwrap();
        let lookup = PhoneLookup::from(dto);
        assert!(lookup.exists);
        assert!(lookup.name.is_none());
    }
}
