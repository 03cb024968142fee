use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub focus_border: Color,
    pub blurred_border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub placeholder: Style,

    // Specific components
    pub header: Style,
    pub video_id: Style,
    pub selector_value: Style,
    pub button_idle: Style,
    pub button_busy: Style,
    pub error_text: Style,
    pub footer: Style,
    pub status: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            blurred_border: Color::DarkGray,
            text: Color::White,
            text_secondary: Color::Gray,
            placeholder: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),

            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            video_id: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            selector_value: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            button_idle: Style::default().fg(Color::White).bg(Color::Indexed(62)).add_modifier(Modifier::BOLD),
            button_busy: Style::default().fg(Color::Gray).bg(Color::DarkGray).add_modifier(Modifier::DIM),
            error_text: Style::default().fg(Color::Red),
            footer: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            status: Style::default().fg(Color::Magenta),
        }
    }
}

impl Theme {
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus_border).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.blurred_border)
        }
    }
}
