//! Fixture helpers shared by the shell's test modules.

use std::fs;
use std::path::Path;

use super::{App, Preferences};
use crate::source::DirSource;

pub(crate) fn write_fixture(root: &Path) {
    fs::create_dir_all(root.join("data")).unwrap();
    fs::create_dir_all(root.join("locales")).unwrap();
    fs::write(
        root.join("data/catalog.json"),
        r#"{
            "version": 1,
            "updatedAt": "2025-01-01",
            "contact": { "email": "shop@example.com" },
            "categories": [
                { "id": "bracelets", "nameKey": "category.bracelets.name", "sort": 10 }
            ],
            "products": [
                { "id": "silver-braid", "published": true, "categoryId": "bracelets",
                  "sortInCategory": 1, "nameKey": "product.silverBraid.name",
                  "shortDescKey": "product.silverBraid.short",
                  "longDescKey": "product.silverBraid.long",
                  "tags": ["silver"], "priceText": "$49",
                  "images": { "thumb": "t.jpg", "preview": "p.jpg",
                              "gallery": [], "original": "o.jpg" } },
                { "id": "draft-cuff", "published": false, "categoryId": "bracelets",
                  "sortInCategory": 2, "nameKey": "product.draftCuff.name",
                  "shortDescKey": "product.draftCuff.short",
                  "longDescKey": "product.draftCuff.long",
                  "tags": [], "priceText": "$10",
                  "images": { "thumb": "t.jpg", "preview": "p.jpg",
                              "gallery": [], "original": "o.jpg" } }
            ]
        }"#,
    )
    .unwrap();
    fs::write(
        root.join("locales/en.json"),
        r#"{ "site.title": "Vitrine" }"#,
    )
    .unwrap();
}

/// Preferences pinned to English so tests never consult `LANG`.
pub(crate) fn english() -> Preferences {
    Preferences {
        locale: Some("en".to_string()),
    }
}

/// A fully started app over the fixture in `root`.
pub(crate) async fn fixture_app(root: &Path) -> App {
    write_fixture(root);
    App::with_preferences(Box::new(DirSource::new(root)), english()).await
}
