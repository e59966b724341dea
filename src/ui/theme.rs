use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(16, 14, 12);
pub const BG_PANEL: Color = Color::Rgb(24, 21, 18);
pub const FG_PRIMARY: Color = Color::Rgb(224, 218, 208);
pub const FG_DIM: Color = Color::Rgb(140, 132, 120);

pub const BAR_BG: Color = Color::Rgb(62, 40, 28);
pub const BAR_TEXT: Color = Color::Rgb(240, 232, 220);

pub const ACCENT: Color = Color::Rgb(201, 146, 66);
pub const PRICE_FG: Color = Color::Rgb(214, 168, 96);
pub const TAG_FG: Color = Color::Rgb(156, 148, 120);

pub const BORDER_IDLE: Color = Color::Rgb(92, 78, 64);
pub const SELECTION_BG: Color = Color::Rgb(120, 82, 40);
pub const SELECTION_FG: Color = Color::Rgb(255, 250, 240);

pub const ERROR_FG: Color = Color::Rgb(222, 104, 92);
