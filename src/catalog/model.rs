use serde::Deserialize;

/// Top-level catalog document, loaded once at startup from
/// `data/catalog.json` under the deployment base.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub version: u32,
    pub updated_at: String,
    pub contact: ContactInfo,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    /// Translation key for the display name.
    pub name_key: String,
    /// Higher values list first.
    pub sort: i64,
    #[serde(default)]
    pub featured_product_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub published: bool,
    pub category_id: String,
    /// Higher values list first within the owning category.
    pub sort_in_category: i64,
    pub name_key: String,
    pub short_desc_key: String,
    pub long_desc_key: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Pre-formatted display string, currency included.
    pub price_text: String,
    pub images: ProductImages,
    #[serde(default)]
    pub specs: Vec<SpecEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImages {
    pub thumb: String,
    pub preview: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub original: String,
}

/// One row of the product spec table: `k` is a translation key,
/// `v` is a literal value.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecEntry {
    pub k: String,
    pub v: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_deserializes_camel_case_wire_names() {
        let raw = r#"{
            "version": 3,
            "updatedAt": "2025-11-02",
            "contact": { "email": "shop@example.com", "phone": "+33 1 02 03 04" },
            "categories": [
                { "id": "bracelets", "nameKey": "category.bracelets.name", "sort": 20,
                  "featuredProductId": "silver-braid" }
            ],
            "products": [
                { "id": "silver-braid", "published": true, "categoryId": "bracelets",
                  "sortInCategory": 10, "nameKey": "product.silverBraid.name",
                  "shortDescKey": "product.silverBraid.short",
                  "longDescKey": "product.silverBraid.long",
                  "tags": ["silver", "braided"], "priceText": "$49",
                  "images": { "thumb": "images/silver-braid_thumb.jpg",
                              "preview": "images/silver-braid_preview.jpg",
                              "gallery": ["images/silver-braid_1.jpg"],
                              "original": "images/silver-braid.jpg" },
                  "specs": [ { "k": "spec.material", "v": "925 silver" } ] }
            ]
        }"#;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.version, 3);
        assert_eq!(catalog.categories[0].name_key, "category.bracelets.name");
        assert_eq!(
            catalog.categories[0].featured_product_id.as_deref(),
            Some("silver-braid")
        );
        let product = &catalog.products[0];
        assert_eq!(product.category_id, "bracelets");
        assert_eq!(product.sort_in_category, 10);
        assert_eq!(product.images.gallery.len(), 1);
        assert_eq!(product.specs[0].k, "spec.material");
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let raw = r#"{
            "version": 1,
            "updatedAt": "2025-01-01",
            "contact": { "email": "shop@example.com" },
            "categories": [
                { "id": "rings", "nameKey": "category.rings.name", "sort": 5 }
            ]
        }"#;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert!(catalog.categories[0].featured_product_id.is_none());
        assert!(catalog.products.is_empty());
        assert!(catalog.contact.phone.is_empty());
    }
}
