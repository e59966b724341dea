//! Core state types.
//!
//! `App` is the single source of truth: it owns the loaded stores,
//! the navigation state and whatever overlay is on screen. Views
//! borrow from it; nothing here is global.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::catalog::CatalogStore;
use crate::i18n::{LocaleInfo, LocaleStore, SUPPORTED_LOCALES};
use crate::router::{Location, Router};
use crate::source::DataSource;

use super::Preferences;

/// Keystrokes within this window collapse into one search run.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
/// The search overlay shows at most this many products.
pub const SEARCH_RESULT_LIMIT: usize = 6;

pub struct App {
    pub running: bool,
    pub router: Router,
    pub location: Location,
    pub page: Page,
    /// `None` only when the startup load failed.
    pub catalog: Option<CatalogStore>,
    pub locale: LocaleStore,
    pub preferences: Preferences,
    pub overlay: Option<Overlay>,
    pub status_message: String,
    /// Header hit regions, refreshed on every draw.
    pub nav_areas: NavAreas,
    pub(crate) source: Box<dyn DataSource>,
    pub(crate) pending_search: Option<PendingSearch>,
}

impl App {
    pub(crate) fn search_overlay(&self) -> Option<&SearchOverlay> {
        match &self.overlay {
            Some(Overlay::Search(overlay)) => Some(overlay),
            _ => None,
        }
    }

    pub(crate) fn search_overlay_mut(&mut self) -> Option<&mut SearchOverlay> {
        match &mut self.overlay {
            Some(Overlay::Search(overlay)) => Some(overlay),
            _ => None,
        }
    }
}

/// The view currently occupying the content area, with its UI state.
#[derive(Debug, Clone)]
pub enum Page {
    Home(HomePage),
    Category(CategoryPage),
    Product(ProductPage),
    Contact,
    NotFound(MissingEntity),
    /// Generic startup-failure panel; only a restart recovers.
    LoadError(String),
}

#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub id: String,
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct ProductPage {
    pub id: String,
    /// 0 is the preview image; gallery entries follow.
    pub gallery_index: usize,
    pub scroll: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEntity {
    Category,
    Product,
}

pub enum Overlay {
    Search(SearchOverlay),
    LocaleSwitcher(LocaleSwitcherState),
}

#[derive(Default)]
pub struct SearchOverlay {
    pub composer: SearchComposer,
    /// Ids of matched products, already truncated for display.
    pub results: Vec<String>,
    pub selected: usize,
    /// Distinguishes "nothing typed yet" from "no matches".
    pub searched: bool,
}

/// A search queued behind the debounce window.
pub struct PendingSearch {
    pub query: String,
    pub deadline: Instant,
}

/// Single-line text input for the search overlay.
#[derive(Clone, Default)]
pub struct SearchComposer {
    buffer: String,
    cursor: usize,
}

impl SearchComposer {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.buffer.len() {
            return;
        }
        if let Some((_, ch)) = self.buffer[self.cursor..].char_indices().next() {
            let end = self.cursor + ch.len_utf8();
            self.buffer.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some((offset, ch)) = self.buffer[self.cursor..].char_indices().next() {
            self.cursor += offset + ch.len_utf8();
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Display column of the cursor, CJK-aware.
    pub fn display_col(&self) -> u16 {
        self.buffer[..self.cursor]
            .chars()
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1).max(1) as u16)
            .sum()
    }
}

/// Selection state for the language overlay.
#[derive(Debug, Clone)]
pub struct LocaleSwitcherState {
    pub entries: Vec<LocaleInfo>,
    pub selected: usize,
}

impl LocaleSwitcherState {
    /// Opens with the active locale pre-selected.
    pub fn new(current: &str) -> Self {
        let entries: Vec<LocaleInfo> = SUPPORTED_LOCALES.to_vec();
        let selected = entries
            .iter()
            .position(|locale| locale.code == current)
            .unwrap_or(0);
        Self { entries, selected }
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.entries.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.entries.len() as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, last) as usize;
    }

    pub fn selected_locale(&self) -> Option<&LocaleInfo> {
        self.entries.get(self.selected)
    }
}

/// Where a click in the header bar lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Contact,
    Search,
    Locale,
}

/// Clickable header regions, written during rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavAreas {
    pub title: Rect,
    pub contact: Rect,
    pub search: Rect,
    pub locale: Rect,
}

impl NavAreas {
    pub fn hit(&self, column: u16, row: u16) -> Option<NavTarget> {
        let point = Rect {
            x: column,
            y: row,
            width: 1,
            height: 1,
        };
        if self.title.intersects(point) {
            Some(NavTarget::Home)
        } else if self.contact.intersects(point) {
            Some(NavTarget::Contact)
        } else if self.search.intersects(point) {
            Some(NavTarget::Search)
        } else if self.locale.intersects(point) {
            Some(NavTarget::Locale)
        } else {
            None
        }
    }
}
