use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListState, Paragraph},
    Frame,
};

use crate::app::{App, CategoryPage, MissingEntity};
use crate::components::cards;
use crate::pages::error;
use crate::ui::theme;

/// One category's product listing.
pub fn render(app: &App, state: &CategoryPage, f: &mut Frame, area: Rect) {
    let Some(catalog) = &app.catalog else {
        return;
    };
    let Some(category) = catalog.category_by_id(&state.id) else {
        error::render_not_found(app, MissingEntity::Category, f, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let heading = Line::from(vec![
        Span::styled(
            format!("← {}   ", app.locale.t("button.backToHome")),
            Style::default().fg(theme::FG_DIM),
        ),
        Span::styled(
            app.locale.t(&category.name_key),
            Style::default()
                .fg(theme::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(heading), chunks[0]);

    let products = catalog.products_by_category(&state.id);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme::FG_PRIMARY))
        .border_style(Style::default().fg(theme::BORDER_IDLE));

    if products.is_empty() {
        let empty = Paragraph::new(app.locale.t("category.empty"))
            .style(Style::default().fg(theme::FG_DIM))
            .block(block);
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<_> = products
        .iter()
        .map(|product| cards::product_item(product, &app.locale))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme::SELECTION_BG)
                .fg(theme::SELECTION_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(products.len() - 1)));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}
