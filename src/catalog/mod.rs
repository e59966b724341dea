//! Catalog store and query layer.
//!
//! The store owns the parsed catalog document and exposes the read
//! accessors the views are built from. The document is immutable after
//! construction; every accessor is a synchronous scan over the
//! in-memory lists.

mod model;

pub use model::{Catalog, Category, ContactInfo, Product, ProductImages, SpecEntry};

/// Read-only query interface over a loaded catalog document.
///
/// Constructing the store requires a document, so accessors can never
/// run against unloaded data.
pub struct CatalogStore {
    doc: Catalog,
}

impl CatalogStore {
    pub fn new(doc: Catalog) -> Self {
        Self { doc }
    }

    /// Categories in display order: descending by sort weight.
    pub fn categories_sorted(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.doc.categories.iter().collect();
        categories.sort_by(|a, b| b.sort.cmp(&a.sort));
        categories
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.doc.categories.iter().find(|c| c.id == id)
    }

    /// Looks up a product by id. Unpublished products are invisible
    /// through this accessor.
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.doc.products.iter().find(|p| p.id == id && p.published)
    }

    /// Published products of one category, descending by in-category
    /// sort weight.
    pub fn products_by_category(&self, category_id: &str) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .doc
            .products
            .iter()
            .filter(|p| p.category_id == category_id && p.published)
            .collect();
        products.sort_by(|a, b| b.sort_in_category.cmp(&a.sort_in_category));
        products
    }

    /// Resolves the product shown on a category card.
    ///
    /// The explicit `featured_product_id` wins when it names a
    /// published product; otherwise the first product of the category
    /// stands in. `None` only for a category with no published
    /// products.
    pub fn featured_product(&self, category: &Category) -> Option<&Product> {
        if let Some(id) = category.featured_product_id.as_deref()
            && let Some(product) = self.product_by_id(id)
        {
            return Some(product);
        }
        self.products_by_category(&category.id).into_iter().next()
    }

    /// Case-insensitive substring search over name key, short
    /// description key and tags. Unpublished products are excluded;
    /// results keep document order and are not ranked. Callers
    /// truncate for display.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.doc
            .products
            .iter()
            .filter(|p| p.published)
            .filter(|p| {
                p.name_key.to_lowercase().contains(&needle)
                    || p.short_desc_key.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn all_products(&self) -> Vec<&Product> {
        self.doc.products.iter().filter(|p| p.published).collect()
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.doc.contact
    }
}
