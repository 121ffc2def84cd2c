use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::views::list::render_list;
use crate::vault::form::FormField;

const FIELDS: [FormField; 3] = [FormField::Platform, FormField::Username, FormField::Password];

fn field_line<'a>(field: FormField, value: &'a str, focused: bool, theme: &Theme) -> Paragraph<'a> {
    let (text, style) = if value.is_empty() {
        (format!("{}: {}", field.label(), field.placeholder()), theme.muted_style())
    } else {
        (format!("{}: {value}", field.label()), theme.normal_style())
    };
    let style = if focused { theme.selection_style() } else { style };
    Paragraph::new(text).style(style)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Add-credentials modal drawn over the list.
pub fn render_form(f: &mut Frame, app: &App) {
    let theme = Theme::default();
    render_list(f, app);

    let area = centered(f.area(), 56, 7);
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add New Credentials")
        .title_style(theme.title_style());
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (i, field) in FIELDS.into_iter().enumerate() {
        let para = field_line(field, app.form.value(field), app.form.focus == field, &theme);
        f.render_widget(para, inner[i]);
    }

    let footer = "Esc=cancel  Tab/Shift-Tab=switch  Enter=add";
    f.render_widget(Paragraph::new(footer).style(theme.toast_style()), inner[4]);
}
