use crate::app::app_state::AppState;
use crate::models::TaskListView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table},
};
use ratatui_macros::span;

pub(crate) fn render(f: &mut Frame, area: Rect, state: &mut AppState, focused: bool) {
    let instructions = vec![
        " ".into(),
        span!("Enter/Space").green().bold(),
        span!(" toggle, ").white(),
        span!("d").green().bold(),
        span!(" delete, ").white(),
        span!("r").green().bold(),
        span!(" reload ").white(),
    ];

    let border = if focused {
        Color::LightBlue
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .padding(Padding::symmetric(1, 0))
        .title(Line::from(" Tasks ").bold())
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(instructions));

    let selected_row_style = Style::default()
        .add_modifier(Modifier::REVERSED)
        .add_modifier(Modifier::BOLD);

    let rows = build_rows(&state.view);
    let widths = [
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths)
        .block(block)
        .row_highlight_style(selected_row_style);
    f.render_stateful_widget(table, area, &mut state.table);
}

fn build_rows<'a>(view: &'a TaskListView) -> Vec<Row<'a>> {
    let rows = match view {
        TaskListView::Placeholder(text) => {
            return vec![Row::new(vec![Cell::from(span!("{}", text).red().bold())])];
        }
        TaskListView::Rows(rows) => rows,
    };

    if rows.is_empty() {
        return vec![Row::new(vec![Cell::from(
            span!("No tasks yet").dim().italic(),
        )])];
    }

    rows.iter()
        .map(|row| {
            let label = if row.done {
                span!("{}", row.label).crossed_out().dim()
            } else {
                span!("{}", row.label)
            };
            Row::new(vec![
                Cell::from(label),
                Cell::from(span!("[{}]", row.toggle_label).green()),
                Cell::from(span!("[Delete]").red()),
            ])
            .height(1)
        })
        .collect()
}
