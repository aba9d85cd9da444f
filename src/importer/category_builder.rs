// ==========================================
// Storefront Catalog - Category Builder
// ==========================================
// Responsibility: fold flat category rows into an L1/L2 tree
// Rules:
// - an L1 is keyed by abbreviation, first occurrence wins
// - a repeated abbreviation must repeat the same English name
// - every row contributes exactly one L2 child
// - any invalid row aborts the whole run
// ==========================================

use crate::domain::{derived_image_url, Category, CategoryLevel, DocumentId};
use crate::importer::catalog_importer_trait::{RawRow, RawTable};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::header_index::CategoryHeaders;
use crate::importer::validator::{validate_child_category, validate_parent_category};
use std::collections::HashMap;
use tracing::debug;

pub struct CategoryBuilder {
    headers: CategoryHeaders,
    image_extension: String,
    categories: Vec<Category>,
    by_abbreviation: HashMap<String, usize>,
}

impl CategoryBuilder {
    pub fn new(headers: CategoryHeaders, image_extension: impl Into<String>) -> Self {
        Self {
            headers,
            image_extension: image_extension.into(),
            categories: Vec::new(),
            by_abbreviation: HashMap::new(),
        }
    }

    fn new_category(&self, level: CategoryLevel, name_en: &str, name_id: &str) -> Category {
        let id = DocumentId::generate();
        Category {
            id,
            level,
            name_en: name_en.to_string(),
            name_id: name_id.to_string(),
            images_urls: vec![derived_image_url(&id.to_string(), &self.image_extension)],
            abbreviation: String::new(),
            child_categories: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: &RawRow) -> ImportResult<()> {
        let h = self.headers;
        let name_en = row.cell(h.category_name_en);
        let abbreviation = row.cell(h.abbreviation);

        if let Some(&idx) = self.by_abbreviation.get(abbreviation) {
            if self.categories[idx].name_en != name_en {
                return Err(ImportError::AbbreviationMismatch {
                    row: row.number,
                    abbreviation: abbreviation.to_string(),
                });
            }
        }

        let child = self.new_category(
            CategoryLevel::Level2,
            row.cell(h.subcategory_name_en),
            row.cell(h.subcategory_name_id),
        );
        validate_child_category(&child).map_err(|e| ImportError::invalid_row(row.number, e))?;

        if let Some(&idx) = self.by_abbreviation.get(abbreviation) {
            self.categories[idx].child_categories.push(child);
            return Ok(());
        }

        let mut parent =
            self.new_category(CategoryLevel::Level1, name_en, row.cell(h.category_name_id));
        parent.abbreviation = abbreviation.to_string();
        parent.child_categories.push(child);
        validate_parent_category(&parent).map_err(|e| ImportError::invalid_row(row.number, e))?;

        debug!(row = row.number, abbreviation = %abbreviation, "new level 1 category");
        self.by_abbreviation
            .insert(abbreviation.to_string(), self.categories.len());
        self.categories.push(parent);
        Ok(())
    }

    /// L1 categories in first-seen order.
    pub fn finish(self) -> Vec<Category> {
        self.categories
    }
}

/// Fold a whole category table.
pub fn build_category_tree(table: &RawTable, image_extension: &str) -> ImportResult<Vec<Category>> {
    let mut builder =
        CategoryBuilder::new(CategoryHeaders::from_header_row(&table.header), image_extension);
    for row in &table.rows {
        builder.add_row(row)?;
    }
    Ok(builder.finish())
}
