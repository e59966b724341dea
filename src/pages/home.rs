use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListState, Paragraph},
    Frame,
};

use crate::app::{App, HomePage};
use crate::components::cards;
use crate::ui::theme;

/// Landing view: the category overview on the left, the selected
/// category's products on the right.
pub fn render(app: &App, state: &HomePage, f: &mut Frame, area: Rect) {
    let Some(catalog) = &app.catalog else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(area);

    let categories = catalog.categories_sorted();
    let selected = if categories.is_empty() {
        None
    } else {
        Some(state.selected.min(categories.len() - 1))
    };

    let items: Vec<_> = categories
        .iter()
        .map(|category| {
            cards::category_item(category, catalog.featured_product(category), &app.locale)
        })
        .collect();
    let list = List::new(items)
        .block(panel(app.locale.t("home.categories")))
        .highlight_style(
            Style::default()
                .bg(theme::SELECTION_BG)
                .fg(theme::SELECTION_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default();
    list_state.select(selected);
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let Some(category) = selected.and_then(|index| categories.get(index)) else {
        return;
    };
    let products = catalog.products_by_category(&category.id);
    let block = panel(app.locale.t(&category.name_key));

    if products.is_empty() {
        let empty = Paragraph::new(app.locale.t("category.empty"))
            .style(Style::default().fg(theme::FG_DIM))
            .block(block);
        f.render_widget(empty, chunks[1]);
        return;
    }

    let product_items: Vec<_> = products
        .iter()
        .map(|product| cards::product_item(product, &app.locale))
        .collect();
    f.render_widget(List::new(product_items).block(block), chunks[1]);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme::FG_PRIMARY))
        .border_style(Style::default().fg(theme::BORDER_IDLE))
}
