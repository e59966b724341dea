//! Application shell: state, input handling and navigation.
//!
//! Each submodule is one responsibility; everything hangs off the
//! `App` struct defined in `state`.

/// Shared actions: overlays, search, locale switching, selection.
mod actions;
/// `App` construction and the concurrent startup load.
mod init;
/// Keyboard dispatch: overlay capture, global shortcuts, page keys.
mod keyboard;
/// Mouse dispatch: header hit-testing and wheel scrolling.
mod mouse;
/// Route dispatch and back-navigation.
mod navigation;
/// The persisted locale preference.
mod preferences;
/// Core state types.
mod state;
#[cfg(test)]
mod testutil;
/// Timer work: the search debounce.
mod tick;

pub use preferences::Preferences;
pub use state::{
    App, CategoryPage, HomePage, LocaleSwitcherState, MissingEntity, NavAreas, NavTarget,
    Overlay, Page, PendingSearch, ProductPage, SearchComposer, SearchOverlay,
    SEARCH_DEBOUNCE, SEARCH_RESULT_LIMIT,
};
