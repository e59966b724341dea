use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Overlay, Page};

impl App {
    /// Keyboard entry point. Overlays capture everything; global
    /// shortcuts come next; what remains goes to the current page.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.overlay.is_some() {
            self.handle_overlay_key(key).await;
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_page_key(key);
    }

    /// Shortcuts that work on every page. Returns `true` when the
    /// key was consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.quit();
                true
            }
            (KeyCode::Char('/'), KeyModifiers::NONE)
            | (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
                self.open_search();
                true
            }
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                self.open_locale_switcher();
                true
            }
            (KeyCode::Char('h'), KeyModifiers::NONE) => {
                self.navigate("/");
                true
            }
            (KeyCode::Char('c'), KeyModifiers::NONE) => {
                self.navigate("/contact");
                true
            }
            (KeyCode::Esc, _) | (KeyCode::Backspace, _) => {
                self.navigate_back();
                true
            }
            _ => false,
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let on_product = matches!(self.page, Page::Product(_));
        match key.code {
            KeyCode::Up if on_product => self.scroll_page(-1),
            KeyCode::Down if on_product => self.scroll_page(1),
            KeyCode::Left if on_product => self.adjust_gallery(-1),
            KeyCode::Right if on_product => self.adjust_gallery(1),
            KeyCode::PageUp => self.scroll_page(-5),
            KeyCode::PageDown => self.scroll_page(5),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => self.activate_selection(),
            _ => {}
        }
    }

    async fn handle_overlay_key(&mut self, key: KeyEvent) {
        if matches!(self.overlay, Some(Overlay::Search(_))) {
            self.handle_search_key(key);
        } else if matches!(self.overlay, Some(Overlay::LocaleSwitcher(_))) {
            self.handle_switcher_key(key).await;
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.close_overlay(),
            (KeyCode::Enter, _) => {
                let chosen = self
                    .search_overlay()
                    .and_then(|overlay| overlay.results.get(overlay.selected).cloned());
                if let Some(id) = chosen {
                    self.close_overlay();
                    self.navigate(&format!("/p/{id}"));
                } else {
                    // Nothing selectable yet: flush the debounce and
                    // search right away.
                    let query = self
                        .search_overlay()
                        .map(|overlay| overlay.composer.text().to_string())
                        .unwrap_or_default();
                    self.pending_search = None;
                    self.run_search(&query);
                }
            }
            (KeyCode::Up, _) => {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.selected = overlay.selected.saturating_sub(1);
                }
            }
            (KeyCode::Down, _) => {
                if let Some(overlay) = self.search_overlay_mut()
                    && !overlay.results.is_empty()
                {
                    overlay.selected = (overlay.selected + 1).min(overlay.results.len() - 1);
                }
            }
            (KeyCode::Left, _) => {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.composer.move_left();
                }
            }
            (KeyCode::Right, _) => {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.composer.move_right();
                }
            }
            (KeyCode::Home, _) => {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.composer.move_to_start();
                }
            }
            (KeyCode::End, _) => {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.composer.move_to_end();
                }
            }
            (KeyCode::Backspace, _) => {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.composer.backspace();
                }
                self.schedule_search();
            }
            (KeyCode::Delete, _) => {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.composer.delete();
                }
                self.schedule_search();
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.composer.clear();
                }
                self.schedule_search();
            }
            (KeyCode::Char(ch), modifiers)
                if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
            {
                if let Some(overlay) = self.search_overlay_mut() {
                    overlay.composer.insert_char(ch);
                }
                self.schedule_search();
            }
            _ => {}
        }
    }

    async fn handle_switcher_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_overlay(),
            KeyCode::Up | KeyCode::Down => {
                let delta = if key.code == KeyCode::Up { -1 } else { 1 };
                if let Some(Overlay::LocaleSwitcher(switcher)) = &mut self.overlay {
                    switcher.move_selection(delta);
                }
            }
            KeyCode::Enter => {
                let code = match &self.overlay {
                    Some(Overlay::LocaleSwitcher(switcher)) => {
                        switcher.selected_locale().map(|locale| locale.code)
                    }
                    _ => None,
                };
                if let Some(code) = code {
                    self.change_locale(code).await;
                }
            }
            _ => {}
        }
    }
}
