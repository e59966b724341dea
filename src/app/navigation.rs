use log::debug;

use super::{App, CategoryPage, HomePage, MissingEntity, Page, ProductPage};
use crate::catalog::CatalogStore;
use crate::router::{normalize_fragment, PageTarget, RouteMatch};

impl App {
    /// Moves to `path` and re-dispatches. Navigating to the current
    /// path does nothing, mirroring an unchanged location fragment.
    pub fn navigate(&mut self, path: &str) {
        if self.location.navigate(path) {
            self.dispatch_current();
        }
    }

    /// Steps back through the visit history; from the history root it
    /// falls back to home.
    pub fn navigate_back(&mut self) {
        if self.location.back().is_some() {
            self.dispatch_current();
        } else if self.location.current() != "/" {
            self.location.replace("/");
            self.dispatch_current();
        }
    }

    /// Resolves the current location against the route table and
    /// rebuilds the page state. Unknown paths redirect to `/` without
    /// polluting the history. Inert while the error view is pinned.
    pub(crate) fn dispatch_current(&mut self) {
        let Some(catalog) = self.catalog.as_ref() else {
            return;
        };
        let path = normalize_fragment(self.location.current()).to_string();
        match self.router.resolve(&path) {
            Some(matched) => self.page = page_for(catalog, matched),
            None => {
                debug!("no route for {path}, redirecting home");
                self.location.replace("/");
                self.page = Page::Home(HomePage::default());
            }
        }
    }
}

fn page_for(catalog: &CatalogStore, matched: RouteMatch) -> Page {
    let param_id = |name: &str| matched.params.get(name).cloned().unwrap_or_default();

    match matched.target {
        PageTarget::Home => Page::Home(HomePage::default()),
        PageTarget::Contact => Page::Contact,
        PageTarget::Category => {
            let id = param_id("id");
            if catalog.category_by_id(&id).is_some() {
                Page::Category(CategoryPage { id, selected: 0 })
            } else {
                Page::NotFound(MissingEntity::Category)
            }
        }
        PageTarget::Product => {
            let id = param_id("id");
            if catalog.product_by_id(&id).is_some() {
                Page::Product(ProductPage {
                    id,
                    gallery_index: 0,
                    scroll: 0,
                })
            } else {
                Page::NotFound(MissingEntity::Product)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testutil::{english, fixture_app};
    use crate::source::DirSource;

    #[tokio::test]
    async fn startup_lands_on_home() {
        let dir = tempfile::tempdir().unwrap();
        let app = fixture_app(dir.path()).await;
        assert!(app.catalog.is_some());
        assert!(matches!(app.page, Page::Home(_)));
    }

    #[tokio::test]
    async fn category_route_binds_its_parameter() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fixture_app(dir.path()).await;
        app.navigate("/c/bracelets");
        match &app.page {
            Page::Category(state) => assert_eq!(state.id, "bracelets"),
            other => panic!("expected category page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_entity_shows_not_found_and_back_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fixture_app(dir.path()).await;
        app.navigate("/c/no-such-category");
        assert!(matches!(app.page, Page::NotFound(MissingEntity::Category)));
        app.navigate_back();
        assert!(matches!(app.page, Page::Home(_)));
    }

    #[tokio::test]
    async fn unpublished_product_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fixture_app(dir.path()).await;
        app.navigate("/p/draft-cuff");
        assert!(matches!(app.page, Page::NotFound(MissingEntity::Product)));
    }

    #[tokio::test]
    async fn unmatched_path_redirects_home() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fixture_app(dir.path()).await;
        app.navigate("/c/bracelets");
        app.navigate("/definitely/not/registered");
        assert!(matches!(app.page, Page::Home(_)));
        assert_eq!(app.location.current(), "/");
    }

    #[tokio::test]
    async fn failed_startup_pins_the_error_view() {
        let dir = tempfile::tempdir().unwrap();
        // No fixture written: the catalog fetch fails.
        let mut app =
            App::with_preferences(Box::new(DirSource::new(dir.path())), english()).await;
        assert!(app.catalog.is_none());
        assert!(matches!(app.page, Page::LoadError(_)));
        app.navigate("/contact");
        assert!(matches!(app.page, Page::LoadError(_)));
    }
}
