use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, List, ListState, Paragraph},
    Frame,
};

use super::cards;
use crate::app::App;
use crate::ui::theme;

/// Centered search popup: one input line above the result cards.
pub fn render_search_overlay(app: &App, f: &mut Frame) {
    let Some(overlay) = app.search_overlay() else {
        return;
    };

    let screen = f.size();
    let width = 64.min(screen.width.saturating_sub(4));
    let height = 17.min(screen.height.saturating_sub(4));
    let popup = centered(screen, width, height);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", app.locale.t("search.placeholder")))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(theme::BG_PANEL).fg(theme::FG_PRIMARY))
        .border_style(Style::default().fg(theme::ACCENT));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let input = Paragraph::new(overlay.composer.text())
        .style(Style::default().fg(theme::FG_PRIMARY).add_modifier(Modifier::BOLD));
    f.render_widget(input, chunks[0]);
    f.set_cursor(
        chunks[0].x + overlay.composer.display_col().min(chunks[0].width.saturating_sub(1)),
        chunks[0].y,
    );

    let Some(catalog) = &app.catalog else {
        return;
    };

    if overlay.results.is_empty() {
        if overlay.searched {
            let empty = Paragraph::new(app.locale.t("search.noResults"))
                .style(Style::default().fg(theme::FG_DIM));
            f.render_widget(empty, chunks[1]);
        }
        return;
    }

    let items: Vec<_> = overlay
        .results
        .iter()
        .filter_map(|id| catalog.product_by_id(id))
        .map(|product| cards::product_item(product, &app.locale))
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme::SELECTION_BG)
                .fg(theme::SELECTION_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    let mut state = ListState::default();
    state.select(Some(overlay.selected.min(overlay.results.len() - 1)));
    f.render_stateful_widget(list, chunks[1], &mut state);
}

pub(crate) fn centered(screen: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(height) / 2,
        width: width.min(screen.width),
        height: height.min(screen.height),
    }
}
