pub mod app;
pub mod theme;
pub mod views;

use crate::config::config::Config;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

use self::app::{App, Control, View};
use self::views::form::render_form;
use self::views::list::render_list;

pub fn draw(f: &mut ratatui::Frame, app: &App) {
    match app.view {
        View::List => render_list(f, app),
        View::AddModal => render_form(f, app),
    }
}

/// Run the interactive manager. Entries exist only until this returns.
pub fn launch(config: &Config) -> Result<()> {
    let mut app = App::new(config.serial_mode, config.mask_limit);
    info!(serial_mode = %config.serial_mode, mask_limit = config.mask_limit, "tui start");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;

    info!(entries = app.store().len(), "tui stop");
    res
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_millis(0));

        if event::poll(timeout)? {
            if let Event::Key(k) = event::read()? {
                if k.kind == KeyEventKind::Press && app.on_key(k) == Control::Quit {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
