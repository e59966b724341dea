use std::time::Instant;

use log::{error, warn};

use super::init::fetch_dictionaries;
use super::{
    App, LocaleSwitcherState, Overlay, Page, PendingSearch, SearchOverlay, SEARCH_DEBOUNCE,
    SEARCH_RESULT_LIMIT,
};
use crate::i18n::{self, SUPPORTED_LOCALES};

impl App {
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    pub(crate) fn open_search(&mut self) {
        self.overlay = Some(Overlay::Search(SearchOverlay::default()));
    }

    pub(crate) fn open_locale_switcher(&mut self) {
        self.overlay = Some(Overlay::LocaleSwitcher(LocaleSwitcherState::new(
            self.locale.locale(),
        )));
    }

    pub(crate) fn close_overlay(&mut self) {
        self.overlay = None;
        self.pending_search = None;
    }

    /// Arms the debounce timer with the composer's current text.
    /// Every keystroke replaces the pending query, so only the last
    /// one in a burst actually runs.
    pub(crate) fn schedule_search(&mut self) {
        let Some(query) = self
            .search_overlay()
            .map(|overlay| overlay.composer.text().to_string())
        else {
            return;
        };
        self.pending_search = Some(PendingSearch {
            query,
            deadline: Instant::now() + SEARCH_DEBOUNCE,
        });
    }

    /// Runs the catalog search and publishes the result ids into the
    /// open search overlay.
    pub(crate) fn run_search(&mut self, query: &str) {
        let trimmed = query.trim();
        let (ids, searched) = if trimmed.is_empty() {
            (Vec::new(), false)
        } else {
            let ids = self
                .catalog
                .as_ref()
                .map(|catalog| {
                    catalog
                        .search(trimmed)
                        .into_iter()
                        .take(SEARCH_RESULT_LIMIT)
                        .map(|product| product.id.clone())
                        .collect()
                })
                .unwrap_or_default();
            (ids, true)
        };

        if let Some(overlay) = self.search_overlay_mut() {
            overlay.selected = 0;
            overlay.results = ids;
            overlay.searched = searched;
        }
    }

    /// Applies a locale choice. Picking the active locale is a no-op:
    /// nothing is fetched, nothing is written, no re-render happens.
    pub(crate) async fn change_locale(&mut self, code: &'static str) {
        if !i18n::is_supported(code) {
            return;
        }
        if code == self.locale.locale() {
            self.close_overlay();
            return;
        }

        let fetched = fetch_dictionaries(self.source.as_ref(), code).await;
        match fetched {
            Ok((active, fallback)) => {
                self.locale.replace(code, active, fallback);
                self.preferences.locale = Some(code.to_string());
                if let Err(err) = self.preferences.save() {
                    warn!("could not persist locale preference: {err:#}");
                }
                self.close_overlay();
                // Re-dispatch so the current view picks up the new strings.
                self.dispatch_current();
                let name = SUPPORTED_LOCALES
                    .iter()
                    .find(|locale| locale.code == code)
                    .map(|locale| locale.native_name)
                    .unwrap_or(code);
                self.status_message = format!("Language: {name}");
            }
            Err(err) => {
                // Keep the previous dictionaries; only the attempt failed.
                error!("locale switch to {code} failed: {err}");
                self.close_overlay();
                self.status_message = format!("Could not load language \"{code}\"");
            }
        }
    }

    /// Moves the active list selection on the current page.
    pub(crate) fn move_selection(&mut self, delta: isize) {
        let Some(catalog) = self.catalog.as_ref() else {
            return;
        };
        match &mut self.page {
            Page::Home(state) => {
                let len = catalog.categories_sorted().len();
                state.selected = step(state.selected, delta, len);
            }
            Page::Category(state) => {
                let len = catalog.products_by_category(&state.id).len();
                state.selected = step(state.selected, delta, len);
            }
            _ => {}
        }
    }

    /// Opens whatever the selection points at.
    pub(crate) fn activate_selection(&mut self) {
        let Some(catalog) = self.catalog.as_ref() else {
            return;
        };
        let target = match &self.page {
            Page::Home(state) => catalog
                .categories_sorted()
                .get(state.selected)
                .map(|category| format!("/c/{}", category.id)),
            Page::Category(state) => catalog
                .products_by_category(&state.id)
                .get(state.selected)
                .map(|product| format!("/p/{}", product.id)),
            _ => None,
        };
        if let Some(path) = target {
            self.navigate(&path);
        }
    }

    /// Moves the gallery cursor on the product page.
    pub(crate) fn adjust_gallery(&mut self, delta: isize) {
        let Some(catalog) = self.catalog.as_ref() else {
            return;
        };
        if let Page::Product(state) = &mut self.page
            && let Some(product) = catalog.product_by_id(&state.id)
        {
            // Preview plus gallery entries plus the original.
            let len = 2 + product.images.gallery.len();
            state.gallery_index = step(state.gallery_index, delta, len);
        }
    }

    /// Scrolls the product detail text.
    pub(crate) fn scroll_page(&mut self, delta: i16) {
        if let Page::Product(state) = &mut self.page {
            state.scroll = state.scroll.saturating_add_signed(delta);
        }
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len as isize - 1;
    (current as isize + delta).clamp(0, last) as usize
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Instant;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::app::testutil::fixture_app;

    #[test]
    fn step_clamps_to_bounds() {
        assert_eq!(step(0, -1, 3), 0);
        assert_eq!(step(2, 1, 3), 2);
        assert_eq!(step(1, 1, 3), 2);
        assert_eq!(step(5, 0, 0), 0);
    }

    #[tokio::test]
    async fn switching_to_the_active_locale_refetches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fixture_app(dir.path()).await;
        // Any fetch from here on would fail and dirty the status line.
        fs::remove_file(dir.path().join("locales/en.json")).unwrap();
        let status_before = app.status_message.clone();

        app.open_locale_switcher();
        app.change_locale("en").await;

        assert_eq!(app.locale.locale(), "en");
        assert_eq!(app.status_message, status_before);
        assert!(app.overlay.is_none());
    }

    #[tokio::test]
    async fn failed_locale_switch_keeps_the_old_dictionaries() {
        let dir = tempfile::tempdir().unwrap();
        // The fixture ships English only, so "fr" cannot be fetched.
        let mut app = fixture_app(dir.path()).await;
        app.change_locale("fr").await;

        assert_eq!(app.locale.locale(), "en");
        assert_eq!(app.locale.t("site.title"), "Vitrine");
        assert!(app.status_message.contains("fr"));
    }

    #[tokio::test]
    async fn debounced_search_lands_in_the_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fixture_app(dir.path()).await;
        app.open_search();
        for ch in "braid".chars() {
            app.search_overlay_mut().unwrap().composer.insert_char(ch);
            app.schedule_search();
        }
        // Still pending: nothing has run inside the debounce window.
        assert!(app.search_overlay().unwrap().results.is_empty());

        app.pending_search.as_mut().unwrap().deadline = Instant::now();
        app.on_tick();

        let overlay = app.search_overlay().unwrap();
        assert!(overlay.searched);
        assert_eq!(overlay.results, ["silver-braid"]);
        assert!(app.pending_search.is_none());
    }

    #[tokio::test]
    async fn search_enter_opens_the_selected_product() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fixture_app(dir.path()).await;
        app.open_search();
        app.search_overlay_mut().unwrap().composer.insert_char('s');
        app.run_search("s");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await;

        assert!(app.overlay.is_none());
        match &app.page {
            Page::Product(state) => assert_eq!(state.id, "silver-braid"),
            other => panic!("expected product page, got {other:?}"),
        }
    }
}
