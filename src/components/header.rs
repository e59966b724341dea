use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::i18n::SUPPORTED_LOCALES;
use crate::ui::theme;

/// Top bar: site title, contact link, search hint, active language.
/// Each segment's rectangle is written back to `app.nav_areas` so
/// mouse clicks can land on it.
pub fn render_header(app: &mut App, f: &mut Frame, area: Rect) {
    let title = format!(" ◆ {} ", app.locale.t("site.title"));
    let contact = format!("  {}  ", app.locale.t("nav.contact"));
    let search = format!("  / {}  ", app.locale.t("search.placeholder"));
    let locale = format!(" {} ▾ ", native_name(app.locale.locale()));

    let title_width = title.width();
    let contact_width = contact.width();
    let search_width = search.width();
    let locale_width = locale.width();

    let used = title_width + contact_width + search_width + locale_width;
    let padding = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(theme::BAR_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(contact, Style::default().fg(theme::BAR_TEXT)),
        Span::styled(search, Style::default().fg(theme::FG_DIM)),
        Span::raw(" ".repeat(padding)),
        Span::styled(locale, Style::default().fg(theme::ACCENT)),
    ]);

    let header =
        Paragraph::new(line).style(Style::default().bg(theme::BAR_BG).fg(theme::BAR_TEXT));
    f.render_widget(header, area);

    let segment = |offset: usize, width: usize| Rect {
        x: area.x.saturating_add(offset as u16),
        y: area.y,
        width: width as u16,
        height: 1,
    };
    app.nav_areas.title = segment(0, title_width);
    app.nav_areas.contact = segment(title_width, contact_width);
    app.nav_areas.search = segment(title_width + contact_width, search_width);
    app.nav_areas.locale = segment(
        title_width + contact_width + search_width + padding,
        locale_width,
    );
}

fn native_name(code: &str) -> &str {
    SUPPORTED_LOCALES
        .iter()
        .find(|locale| locale.code == code)
        .map(|locale| locale.native_name)
        .unwrap_or(code)
}
