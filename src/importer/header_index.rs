// ==========================================
// Storefront Catalog - Header Index
// ==========================================
// Responsibility: map header names to column indexes, once per file
// Rule: unknown headers are ignored, a missing header resolves to column 0,
//       a repeated header resolves to its last occurrence
// ==========================================

/// Category extract columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryHeaders {
    pub category_name_en: usize,
    pub category_name_id: usize,
    pub abbreviation: usize,
    pub subcategory_name_en: usize,
    pub subcategory_name_id: usize,
}

impl CategoryHeaders {
    pub const RECOGNIZED: [&'static str; 5] = [
        "category_name_EN",
        "category_name_ID",
        "abbreviation",
        "subcategory_name_EN",
        "subcategory_name_ID",
    ];

    pub fn from_header_row(header: &[String]) -> Self {
        let mut idx = Self::default();
        for (col, name) in header.iter().enumerate() {
            match name.as_str() {
                "category_name_EN" => idx.category_name_en = col,
                "category_name_ID" => idx.category_name_id = col,
                "abbreviation" => idx.abbreviation = col,
                "subcategory_name_EN" => idx.subcategory_name_en = col,
                "subcategory_name_ID" => idx.subcategory_name_id = col,
                _ => {}
            }
        }
        idx
    }
}

/// Product extract columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductHeaders {
    pub shoptree_variant_id: usize,
    pub sku: usize,
    pub product_name_en: usize,
    pub product_name_id: usize,
    pub variant_value: usize,
    pub variant_quantifier_en: usize,
    pub variant_quantifier_id: usize,
    pub maximum_order: usize,
    pub barcode: usize,
    pub category_name_en: usize,
    pub subcategory_name_en: usize,
    pub description_id: usize,
    pub description_en: usize,
    pub image_url: usize,
    pub default_variant: usize,
}

impl ProductHeaders {
    pub const RECOGNIZED: [&'static str; 15] = [
        "product_variant_id",
        "sku_structured",
        "product_name_ENG",
        "product_name_IND",
        "option_value_1",
        "quantifier_ENG",
        "quantifier_IND",
        "maximum_ordered_qty",
        "barcodes",
        "category_name_EN",
        "sub_category_name_EN",
        "product_description_IND",
        "product_description_ENG",
        "image_link",
        "default_variant",
    ];

    pub fn from_header_row(header: &[String]) -> Self {
        let mut idx = Self::default();
        for (col, name) in header.iter().enumerate() {
            match name.as_str() {
                "product_variant_id" => idx.shoptree_variant_id = col,
                "sku_structured" => idx.sku = col,
                "product_name_ENG" => idx.product_name_en = col,
                "product_name_IND" => idx.product_name_id = col,
                "option_value_1" => idx.variant_value = col,
                "quantifier_ENG" => idx.variant_quantifier_en = col,
                "quantifier_IND" => idx.variant_quantifier_id = col,
                "maximum_ordered_qty" => idx.maximum_order = col,
                "barcodes" => idx.barcode = col,
                "category_name_EN" => idx.category_name_en = col,
                "sub_category_name_EN" => idx.subcategory_name_en = col,
                "product_description_IND" => idx.description_id = col,
                "product_description_ENG" => idx.description_en = col,
                "image_link" => idx.image_url = col,
                "default_variant" => idx.default_variant = col,
                _ => {}
            }
        }
        idx
    }
}

/// Inventory columns, read from the product extract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryHeaders {
    pub product_name_en: usize,
    pub shoptree_variant_id: usize,
    pub sellable: usize,
    pub selling_price: usize,
}

impl InventoryHeaders {
    pub const RECOGNIZED: [&'static str; 4] = [
        "product_name_ENG",
        "product_variant_id",
        "variant_product_sellable",
        "selling_price",
    ];

    pub fn from_header_row(header: &[String]) -> Self {
        let mut idx = Self::default();
        for (col, name) in header.iter().enumerate() {
            match name.as_str() {
                "product_name_ENG" => idx.product_name_en = col,
                "product_variant_id" => idx.shoptree_variant_id = col,
                "variant_product_sellable" => idx.sellable = col,
                "selling_price" => idx.selling_price = col,
                _ => {}
            }
        }
        idx
    }
}
