use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding},
};
use tui_textarea::TextArea;

pub fn build_input<'a>(title: &str, placeholder: &str) -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_placeholder_text(placeholder);
    input.set_cursor_line_style(Style::default());
    input.set_block(input_block(title, false));
    input
}

pub fn set_focused(input: &mut TextArea<'_>, title: &str, focused: bool) {
    input.set_block(input_block(title, focused));
    input.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
}

fn input_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Color::LightMagenta
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(Line::from(title.to_string()).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .padding(Padding::symmetric(1, 0))
}
