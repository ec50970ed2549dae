use crate::app::app_state::Focus;
use ratatui::{Frame, layout::Rect, style::Stylize, text::Line};
use ratatui_macros::span;

pub fn render_help_line(f: &mut Frame, area: Rect, focus: Focus) {
    let mut spans = vec![
        " ".into(),
        span!("Tab").green().bold(),
        span!(" switch focus, ").white(),
    ];

    match focus {
        Focus::Tasks => spans.extend([
            span!("↑/↓").green().bold(),
            span!(" select, ").white(),
            span!("Enter").green().bold(),
            span!(" toggle, ").white(),
            span!("d").green().bold(),
            span!(" delete, ").white(),
        ]),
        Focus::NewTask => spans.extend([
            span!("Enter").green().bold(),
            span!(" add task, ").white(),
        ]),
        Focus::City => spans.extend([
            span!("Enter").green().bold(),
            span!(" fetch weather, ").white(),
        ]),
    }

    spans.extend([span!("Ctrl+q").green().bold(), span!(" quit").white()]);
    f.render_widget(Line::from(spans), area);
}
