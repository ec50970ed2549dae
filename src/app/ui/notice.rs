use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::models::NoticeMessage;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use super::utils;

const DEFAULT_DURATION: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 3;

/// Transient toasts stacked in a corner of the screen. Expired messages
/// are dropped on the next render.
#[derive(Default)]
pub struct Notice {
    messages: VecDeque<(NoticeMessage, Instant)>,
}

impl Notice {
    pub fn add_message(&mut self, message: NoticeMessage) {
        self.messages.push_back((message, Instant::now()));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.add_message(NoticeMessage::info(message));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.messages
            .retain(|(message, since)| since.elapsed() < message.duration().unwrap_or(DEFAULT_DURATION));

        let mut y = area.y;
        for (message, _) in self.messages.iter().take(MAX_VISIBLE) {
            if y + 3 > area.bottom() {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, 3);
            let kind = message.kind();
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(kind.border_color()))
                .padding(Padding::symmetric(1, 0));

            let inner_width = block.inner(rect).width as usize;
            let text = utils::fit_width(message.message(), inner_width);
            let paragraph = Paragraph::new(Line::from(text))
                .style(Style::default().fg(kind.text_color()))
                .block(block);

            f.render_widget(Clear, rect);
            f.render_widget(paragraph, rect);
            y += 3;
        }
    }
}
