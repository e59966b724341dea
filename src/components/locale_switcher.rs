use ratatui::{
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use super::search::centered;
use crate::app::{App, Overlay};
use crate::ui::theme;

/// Small centered list of the supported display languages. The
/// active one carries a filled marker.
pub fn render_locale_switcher(app: &App, f: &mut Frame) {
    let Some(Overlay::LocaleSwitcher(switcher)) = &app.overlay else {
        return;
    };

    let height = switcher.entries.len() as u16 + 2;
    let popup = centered(f.size(), 28, height);
    f.render_widget(Clear, popup);

    let items: Vec<ListItem> = switcher
        .entries
        .iter()
        .map(|entry| {
            let marker = if entry.code == app.locale.locale() {
                "● "
            } else {
                "○ "
            };
            ListItem::new(Line::from(format!("{marker}{}", entry.native_name)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", app.locale.t("locale.title")))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().bg(theme::BG_PANEL).fg(theme::FG_PRIMARY))
                .border_style(Style::default().fg(theme::ACCENT)),
        )
        .highlight_style(
            Style::default()
                .bg(theme::SELECTION_BG)
                .fg(theme::SELECTION_FG)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default();
    state.select(Some(switcher.selected));
    f.render_stateful_widget(list, popup, &mut state);
}
