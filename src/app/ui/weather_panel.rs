use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, area: Rect, text: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::symmetric(1, 0))
        .title(Line::from(" Weather ").bold());

    let paragraph = if text.is_empty() {
        Paragraph::new("Type a city and press Enter to fetch current conditions")
            .style(Style::default().dim().italic())
    } else {
        Paragraph::new(text)
    };

    f.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
