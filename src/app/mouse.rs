use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{App, NavTarget, Page};

impl App {
    /// Mouse entry point. Overlays are keyboard-driven, so pointer
    /// input is ignored while one is open.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.overlay.is_some() {
            return;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.nav_areas.hit(event.column, event.row) {
                    match target {
                        NavTarget::Home => self.navigate("/"),
                        NavTarget::Contact => self.navigate("/contact"),
                        NavTarget::Search => self.open_search(),
                        NavTarget::Locale => self.open_locale_switcher(),
                    }
                }
            }
            MouseEventKind::ScrollUp => self.wheel(-1),
            MouseEventKind::ScrollDown => self.wheel(1),
            _ => {}
        }
    }

    /// The wheel scrolls detail text on the product page and moves
    /// the selection everywhere else.
    fn wheel(&mut self, delta: i16) {
        if matches!(self.page, Page::Product(_)) {
            self.scroll_page(delta);
        } else {
            self.move_selection(delta as isize);
        }
    }
}
