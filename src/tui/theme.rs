use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Debug)]
pub struct Theme {
    pub fg: Color,
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub selection: Color,
    pub revealed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            primary: Color::Blue,
            accent: Color::Red,
            muted: Color::DarkGray,
            selection: Color::Cyan,
            revealed: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }
    pub fn normal_style(&self) -> Style { Style::default().fg(self.fg) }
    pub fn muted_style(&self) -> Style { Style::default().fg(self.muted) }
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::BOLD)
    }
    pub fn selection_style(&self) -> Style { Style::default().fg(self.selection).add_modifier(Modifier::BOLD) }
    pub fn revealed_style(&self) -> Style { Style::default().fg(self.revealed) }
    pub fn toast_style(&self) -> Style { Style::default().fg(self.accent).add_modifier(Modifier::BOLD) }
}
