pub mod app;
pub mod catalog;
pub mod components;
pub mod event;
pub mod i18n;
pub mod pages;
pub mod router;
pub mod source;
pub mod tui;
pub mod ui;

use std::env;
use std::time::Duration;

use anyhow::Result;
use app::App;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use event::Event;
use futures_util::StreamExt;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use tui::{init, restore};
use ui::render;

/// File logging only: stderr belongs to the terminal UI. Level comes
/// from `VITRINE_LOG`, target file from `VITRINE_LOG_FILE`.
fn init_logging() -> Result<()> {
    let level = env::var("VITRINE_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let path = env::var("VITRINE_LOG_FILE").unwrap_or_else(|_| String::from("vitrine.log"));

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
        .build(path)?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appender("file").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err}");
    }

    // Deployment base: first argument, else VITRINE_BASE, else cwd.
    let base = env::args()
        .nth(1)
        .or_else(|| env::var("VITRINE_BASE").ok())
        .unwrap_or_else(|| String::from("."));
    let source = source::source_for_base(&base);

    let mut app = App::new(source).await;
    let mut tui = init()?;

    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(250));

    while app.running {
        tui.draw(|frame| render(&mut app, frame))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    // Resize redraws on the next pass anyway.
                    Some(Ok(_)) => continue,
                    // If the event stream ends or errors, we're done.
                    Some(Err(_)) | None => break,
                }
            }
        };

        match event {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.handle_key(key).await,
            Event::Mouse(mouse) => app.handle_mouse(mouse),
        }
    }

    restore()?;
    Ok(())
}
