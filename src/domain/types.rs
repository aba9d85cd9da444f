// ==========================================
// Storefront Catalog - Domain Types
// ==========================================
// Identifiers and enumerations shared by every catalog entity.
// Serialized forms match the stored document format.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ==========================================
// DocumentId
// ==========================================
// Opaque document identifier, generated at creation.
// Stored as 32-char lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generates a fresh, globally unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil identifier. Never generated; only seen on malformed documents.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Parses both the hex form and the hyphenated UUID form.
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for DocumentId {
    type Error = uuid::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// `<stem>-0.<extension>`, the naming scheme of the first uploaded image.
pub fn derived_image_url(stem: &str, extension: &str) -> String {
    format!("{}-0.{}", stem, extension)
}

// ==========================================
// CategoryLevel
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryLevel {
    #[serde(rename = "CATEGORY_LEVEL_1")]
    Level1, // parent
    #[serde(rename = "CATEGORY_LEVEL_2")]
    Level2, // child
}

impl fmt::Display for CategoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryLevel::Level1 => write!(f, "CATEGORY_LEVEL_1"),
            CategoryLevel::Level2 => write!(f, "CATEGORY_LEVEL_2"),
        }
    }
}

// ==========================================
// VariantStatus
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariantStatus {
    #[default]
    #[serde(rename = "VARIANT_STATUS_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "VARIANT_STATUS_DEFAULT")]
    Default,
}

// ==========================================
// ProductStatus (inventory sellability)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "PRODUCT_STATUS_ENABLED")]
    Enabled,
    #[serde(rename = "PRODUCT_STATUS_DISABLED")]
    Disabled,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::Enabled => write!(f, "PRODUCT_STATUS_ENABLED"),
            ProductStatus::Disabled => write!(f, "PRODUCT_STATUS_DISABLED"),
        }
    }
}

// ==========================================
// Currency
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "CURRENCY_IDR")]
    Idr,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Idr => write!(f, "IDR"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "IDR" | "CURRENCY_IDR" => Ok(Currency::Idr),
            other => Err(format!("unsupported currency: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_round_trips_as_hex() {
        let id = DocumentId::generate();
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json.len(), 34); // 32 hex chars + quotes
        let back: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_document_id_rejects_garbage() {
        let result: Result<DocumentId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_nil_id() {
        assert!(DocumentId::nil().is_nil());
        assert!(!DocumentId::generate().is_nil());
    }

    #[test]
    fn test_derived_image_url() {
        assert_eq!(derived_image_url("DRK-001", "webp"), "DRK-001-0.webp");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&CategoryLevel::Level1).unwrap(),
            "\"CATEGORY_LEVEL_1\""
        );
        assert_eq!(
            serde_json::to_string(&VariantStatus::Default).unwrap(),
            "\"VARIANT_STATUS_DEFAULT\""
        );
        assert_eq!(
            serde_json::to_string(&ProductStatus::Disabled).unwrap(),
            "\"PRODUCT_STATUS_DISABLED\""
        );
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("idr".parse::<Currency>().unwrap(), Currency::Idr);
        assert_eq!("CURRENCY_IDR".parse::<Currency>().unwrap(), Currency::Idr);
        assert!("USD".parse::<Currency>().is_err());
    }
}
