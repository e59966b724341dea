//! Card line builders shared by the home page, the category page and
//! the search overlay.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::catalog::{Category, Product};
use crate::i18n::LocaleStore;
use crate::ui::theme;

/// Two-line product card: localized name with the price, then the
/// short description and up to two tags.
pub fn product_item<'a>(product: &'a Product, locale: &'a LocaleStore) -> ListItem<'a> {
    let title = Line::from(vec![
        Span::styled(
            locale.t(&product.name_key),
            Style::default()
                .fg(theme::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            product.price_text.as_str(),
            Style::default().fg(theme::PRICE_FG),
        ),
    ]);

    let mut detail = vec![Span::styled(
        locale.t(&product.short_desc_key),
        Style::default().fg(theme::FG_DIM),
    )];
    for tag in product.tags.iter().take(2) {
        detail.push(Span::raw("  "));
        detail.push(Span::styled(
            format!("#{tag}"),
            Style::default().fg(theme::TAG_FG),
        ));
    }

    ListItem::new(vec![title, Line::from(detail)])
}

/// Two-line category card: localized name, then the featured product
/// (or the empty-category line).
pub fn category_item<'a>(
    category: &'a Category,
    featured: Option<&'a Product>,
    locale: &'a LocaleStore,
) -> ListItem<'a> {
    let name = Line::from(Span::styled(
        locale.t(&category.name_key),
        Style::default()
            .fg(theme::FG_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ));
    let detail = match featured {
        Some(product) => Line::from(vec![
            Span::styled("★ ", Style::default().fg(theme::ACCENT)),
            Span::styled(
                locale.t(&product.name_key),
                Style::default().fg(theme::FG_DIM),
            ),
        ]),
        None => Line::from(Span::styled(
            locale.t("category.empty"),
            Style::default()
                .fg(theme::FG_DIM)
                .add_modifier(Modifier::ITALIC),
        )),
    };
    ListItem::new(vec![name, detail])
}
