use std::cmp::{max, min};

use crate::models::{TaskListView, TaskRow};
use ratatui::widgets::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tasks,
    NewTask,
    City,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Tasks => Focus::NewTask,
            Focus::NewTask => Focus::City,
            Focus::City => Focus::Tasks,
        }
    }
}

/// Mutable display state. The task view is only ever replaced wholesale by
/// events coming out of the action service, never patched in place.
pub(crate) struct AppState {
    pub view: TaskListView,
    pub table: TableState,
    pub weather_text: String,
    pub focus: Focus,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            view: TaskListView::default(),
            table: TableState::default().with_selected(0),
            weather_text: String::new(),
            focus: Focus::Tasks,
        }
    }

    /// Replace the rendered list and keep the selection in range.
    pub fn set_view(&mut self, view: TaskListView) {
        self.view = view;
        let len = self.view.rows().len();
        let selected = self.table.selected().unwrap_or(0);
        if len == 0 {
            self.table.select(Some(0));
        } else if selected >= len {
            self.table.select(Some(len - 1));
        }
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.view.rows().get(self.table.selected().unwrap_or(0))
    }

    pub fn select_next(&mut self) {
        let rows = self.view.rows().len() as i32;
        let i = match self.table.selected() {
            Some(i) => max(min(rows - 1, i as i32 + 1), 0),
            None => 0,
        } as usize;
        self.table.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        let i = match self.table.selected() {
            Some(i) => max(0, (i as i32) - 1),
            None => 0,
        } as usize;
        self.table.select(Some(i));
    }
}
