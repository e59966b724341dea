pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, Overlay, Page};
use crate::components;
use crate::pages;

/// Draws one frame: header bar, the routed page, status bar, and any
/// overlay on top.
pub fn render(app: &mut App, f: &mut Frame) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_PRIMARY)),
        f.size(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.size());

    components::header::render_header(app, f, chunks[0]);

    // Page state is small; cloning it frees `app` for the renderers.
    let page = app.page.clone();
    match &page {
        Page::Home(state) => pages::home::render(app, state, f, chunks[1]),
        Page::Category(state) => pages::category::render(app, state, f, chunks[1]),
        Page::Product(state) => pages::product::render(app, state, f, chunks[1]),
        Page::Contact => pages::contact::render(app, f, chunks[1]),
        Page::NotFound(kind) => pages::error::render_not_found(app, *kind, f, chunks[1]),
        Page::LoadError(detail) => pages::error::render_load_error(app, detail, f, chunks[1]),
    }

    components::status_bar::render_status_bar(app, f, chunks[2]);

    match &app.overlay {
        Some(Overlay::Search(_)) => components::search::render_search_overlay(app, f),
        Some(Overlay::LocaleSwitcher(_)) => {
            components::locale_switcher::render_locale_switcher(app, f)
        }
        None => {}
    }
}
