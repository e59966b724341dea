use std::time::Instant;

use super::App;

impl App {
    /// Runs once per loop tick. The only timer here is the search
    /// debounce: a pending query executes once its deadline passes,
    /// so a burst of keystrokes costs one scan.
    pub fn on_tick(&mut self) {
        if let Some(pending) = &self.pending_search
            && pending.deadline <= Instant::now()
        {
            let query = pending.query.clone();
            self.pending_search = None;
            self.run_search(&query);
        }
    }
}
