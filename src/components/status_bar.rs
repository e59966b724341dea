use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::theme;

pub fn render_status_bar(app: &App, f: &mut Frame, area: Rect) {
    let footer_text = format!(
        " {}  |  {}  |  {} ",
        app.location.current(),
        app.locale.locale(),
        app.status_message
    );
    let footer = Paragraph::new(footer_text)
        .style(Style::default().bg(theme::ACCENT).fg(theme::SELECTION_FG));
    f.render_widget(footer, area);
}
