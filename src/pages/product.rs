use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, MissingEntity, ProductPage};
use crate::catalog::Product;
use crate::pages::error;
use crate::ui::theme;

/// Product detail: the image gallery on the left, the description
/// and spec table on the right.
pub fn render(app: &App, state: &ProductPage, f: &mut Frame, area: Rect) {
    let Some(catalog) = &app.catalog else {
        return;
    };
    let Some(product) = catalog.product_by_id(&state.id) else {
        error::render_not_found(app, MissingEntity::Product, f, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area);

    render_gallery(app, state, product, f, chunks[0]);
    render_info(app, state, product, f, chunks[1]);
}

fn render_gallery(app: &App, state: &ProductPage, product: &Product, f: &mut Frame, area: Rect) {
    let mut entries: Vec<&str> = Vec::with_capacity(2 + product.images.gallery.len());
    entries.push(product.images.preview.as_str());
    entries.extend(product.images.gallery.iter().map(String::as_str));
    entries.push(product.images.original.as_str());

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let label = if index == 0 {
                format!("▣ {path}")
            } else if index == entries.len() - 1 {
                format!("⬒ {path}  ({})", app.locale.t("button.viewOriginal"))
            } else {
                format!("□ {path}")
            };
            ListItem::new(label)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", app.locale.t("gallery.title")))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme::FG_PRIMARY))
                .border_style(Style::default().fg(theme::BORDER_IDLE)),
        )
        .highlight_style(
            Style::default()
                .bg(theme::SELECTION_BG)
                .fg(theme::SELECTION_FG),
        )
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.gallery_index.min(entries.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_info(app: &App, state: &ProductPage, product: &Product, f: &mut Frame, area: Rect) {
    let locale = &app.locale;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        product.price_text.clone(),
        Style::default()
            .fg(theme::PRICE_FG)
            .add_modifier(Modifier::BOLD),
    )));

    if !product.tags.is_empty() {
        let mut tag_spans = Vec::new();
        for tag in &product.tags {
            tag_spans.push(Span::styled(
                format!("#{tag} "),
                Style::default().fg(theme::TAG_FG),
            ));
        }
        lines.push(Line::from(tag_spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        locale.t(&product.long_desc_key).to_string(),
        Style::default().fg(theme::FG_PRIMARY),
    )));

    if !product.specs.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            locale.t("specs.title").to_string(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::UNDERLINED),
        )));
        let key_width = product
            .specs
            .iter()
            .map(|spec| locale.t(&spec.k).width())
            .max()
            .unwrap_or(0);
        for spec in &product.specs {
            let key = locale.t(&spec.k);
            let pad = " ".repeat(key_width.saturating_sub(key.width()) + 2);
            lines.push(Line::from(vec![
                Span::styled(key.to_string(), Style::default().fg(theme::FG_DIM)),
                Span::raw(pad),
                Span::styled(spec.v.clone(), Style::default().fg(theme::FG_PRIMARY)),
            ]));
        }
    }

    let info = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", locale.t(&product.name_key)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme::FG_PRIMARY))
                .border_style(Style::default().fg(theme::BORDER_IDLE)),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(info, area);
}
