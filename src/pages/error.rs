use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, MissingEntity};
use crate::ui::theme;

/// Generic startup-failure panel. Nothing is recoverable here short
/// of restarting with a reachable deployment base.
pub fn render_load_error(app: &App, detail: &str, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.locale.t("error.loadFailed").to_string(),
            Style::default()
                .fg(theme::ERROR_FG)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(theme::FG_DIM),
        )),
    ];
    f.render_widget(panel(lines, theme::ERROR_FG), area);
}

/// Localized not-found panel; back-navigation recovers.
pub fn render_not_found(app: &App, kind: MissingEntity, f: &mut Frame, area: Rect) {
    let key = match kind {
        MissingEntity::Category => "error.categoryNotFound",
        MissingEntity::Product => "error.productNotFound",
    };
    let lines = vec![
        Line::from(Span::styled(
            app.locale.t(key).to_string(),
            Style::default()
                .fg(theme::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("← {}", app.locale.t("button.backToHome")),
            Style::default().fg(theme::FG_DIM),
        )),
    ];
    f.render_widget(panel(lines, theme::BORDER_IDLE), area);
}

fn panel(lines: Vec<Line<'static>>, border: ratatui::style::Color) -> Paragraph<'static> {
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme::FG_PRIMARY))
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: false })
}
