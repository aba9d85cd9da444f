// ==========================================
// Storefront Catalog - Category Model
// ==========================================
// Two-level tree: L1 nodes own their L2 children.
// Aligned with the `category` collection.
// ==========================================

use crate::domain::types::{CategoryLevel, DocumentId};
use serde::{Deserialize, Serialize};

// ==========================================
// Category
// ==========================================
// L1: abbreviation + child_categories populated
// L2: both empty (omitted from the stored document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub level: CategoryLevel,
    pub name_en: String,
    pub name_id: String, // Indonesian (localized) name
    #[serde(default)]
    pub images_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub abbreviation: String, // SKU coding prefix, L1 only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_categories: Vec<Category>,
}

impl Category {
    pub fn is_parent(&self) -> bool {
        self.level == CategoryLevel::Level1
    }

    /// First child whose English name matches.
    pub fn child_by_name_en(&self, name_en: &str) -> Option<&Category> {
        self.child_categories.iter().find(|c| c.name_en == name_en)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(name: &str) -> Category {
        Category {
            id: DocumentId::generate(),
            level: CategoryLevel::Level2,
            name_en: name.to_string(),
            name_id: format!("{}-ID", name),
            images_urls: vec!["img".to_string()],
            abbreviation: String::new(),
            child_categories: Vec::new(),
        }
    }

    #[test]
    fn test_l2_document_omits_parent_only_fields() {
        let doc = serde_json::to_value(child("Soda")).unwrap();

        assert!(doc.get("_id").is_some());
        assert!(doc.get("abbreviation").is_none());
        assert!(doc.get("child_categories").is_none());
    }

    #[test]
    fn test_child_lookup_first_match() {
        let first = child("Soda");
        let second = child("Soda");
        let parent = Category {
            id: DocumentId::generate(),
            level: CategoryLevel::Level1,
            name_en: "Drinks".to_string(),
            name_id: "Minuman".to_string(),
            images_urls: vec!["img".to_string()],
            abbreviation: "DRK".to_string(),
            child_categories: vec![first.clone(), second],
        };

        assert!(parent.is_parent());
        assert_eq!(parent.child_by_name_en("Soda").unwrap().id, first.id);
        assert!(parent.child_by_name_en("Water").is_none());
    }
}
