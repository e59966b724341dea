use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::theme;

const WEBSITE_URL: &str = "https://vitrine-atelier.example/shop/";

/// Contact view: the catalog's contact block plus the storefront URL.
pub fn render(app: &App, f: &mut Frame, area: Rect) {
    let Some(catalog) = &app.catalog else {
        return;
    };
    let contact = catalog.contact();
    let locale = &app.locale;

    let mut lines = vec![
        Line::from(Span::styled(
            locale.t("contact.description").to_string(),
            Style::default().fg(theme::FG_DIM),
        )),
        Line::default(),
    ];

    let entry = |icon: &str, label: String, value: String| {
        Line::from(vec![
            Span::styled(format!("{icon}  "), Style::default().fg(theme::ACCENT)),
            Span::styled(format!("{label}: "), Style::default().fg(theme::FG_DIM)),
            Span::styled(value, Style::default().fg(theme::FG_PRIMARY)),
        ])
    };

    lines.push(entry(
        "✉",
        locale.t("contact.email").to_string(),
        contact.email.clone(),
    ));
    if !contact.phone.is_empty() {
        lines.push(entry(
            "☎",
            locale.t("contact.phone").to_string(),
            contact.phone.clone(),
        ));
    }
    lines.push(entry(
        "⌂",
        locale.t("contact.website").to_string(),
        WEBSITE_URL.to_string(),
    ));

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", locale.t("contact.title")),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme::FG_PRIMARY))
                .border_style(Style::default().fg(theme::BORDER_IDLE)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}
