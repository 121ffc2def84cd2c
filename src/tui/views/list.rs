use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::tui::app::{App, Mode};
use crate::tui::theme::Theme;

pub fn render_list(f: &mut Frame, app: &App) {
    let theme = Theme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // search / hint
            Constraint::Length(1), // stats
            Constraint::Min(3),    // table
            Constraint::Length(1), // footer/toast
        ])
        .split(f.area());

    let title = Paragraph::new("Local Password Manager").style(theme.title_style());
    f.render_widget(title, chunks[0]);

    let search_label = match app.mode {
        Mode::Normal if app.filter.is_empty() => "Press / to search platforms or usernames".to_string(),
        Mode::Normal => format!("Filter: {}", app.filter),
        Mode::Search => format!("Search: {}_", app.filter),
    };
    f.render_widget(Paragraph::new(search_label).style(theme.muted_style()), chunks[1]);

    let view = app.filtered();
    let stats = format!(
        "Total: {}  |  Platforms: {}  |  Filtered: {}",
        view.stats.total, view.stats.platforms, view.stats.filtered
    );
    f.render_widget(Paragraph::new(stats).style(theme.normal_style()), chunks[2]);

    let block = Block::default().borders(Borders::ALL).title("Credentials");
    if let Some(empty) = view.empty_state() {
        let text = format!("{}\n{}", empty.headline(), empty.hint());
        let para = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(theme.muted_style())
            .block(block);
        f.render_widget(para, chunks[3]);
    } else {
        let header = Row::new(["#", "Platform", "Username", "Password"]).style(theme.header_style());
        let rows: Vec<Row> = view
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let style = if i == app.selected {
                    theme.selection_style()
                } else {
                    theme.normal_style()
                };
                let password = if r.revealed {
                    Cell::from(r.password.clone()).style(theme.revealed_style())
                } else {
                    Cell::from(r.password.clone())
                };
                Row::new(vec![
                    Cell::from(r.serial.to_string()),
                    Cell::from(r.platform.clone()),
                    Cell::from(r.username.clone()),
                    password,
                ])
                .style(style)
            })
            .collect();
        let widths = [
            Constraint::Length(4),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Min(12),
        ];
        let table = Table::new(rows, widths).header(header).block(block);
        f.render_widget(table, chunks[3]);
    }

    let footer_text = app
        .toast_message()
        .unwrap_or("q=quit  a=add  v=show/hide  d=delete  /=search");
    f.render_widget(Paragraph::new(footer_text).style(theme.toast_style()), chunks[4]);
}
