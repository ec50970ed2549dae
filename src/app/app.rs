use std::io;

use crate::models::{Action, Event};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::Result;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    layout::{Constraint, Direction, Layout},
    prelude::{Backend, CrosstermBackend},
    widgets::{Paragraph, Wrap},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_textarea::{Input, Key, TextArea};

use crate::app::app_state::{AppState, Focus};
use crate::app::ui::{self, Notice};

use super::services::EventService;

const MIN_WIDTH: u16 = 40;

const TASK_INPUT_TITLE: &str = " New task ";
const TASK_INPUT_PLACEHOLDER: &str = "What needs doing?";
const CITY_INPUT_TITLE: &str = " City ";
const CITY_INPUT_PLACEHOLDER: &str = "e.g. Berlin";

pub struct App<'a> {
    action_tx: mpsc::UnboundedSender<Action>,
    events: &'a mut EventService,

    app_state: AppState,
    task_input: TextArea<'a>,
    city_input: TextArea<'a>,

    notice: Notice,
    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        events: &'a mut EventService,
        cancel_token: CancellationToken,
    ) -> App<'a> {
        App {
            action_tx,
            events,
            app_state: AppState::new(),
            task_input: ui::inputs::build_input(TASK_INPUT_TITLE, TASK_INPUT_PLACEHOLDER),
            city_input: ui::inputs::build_input(CITY_INPUT_TITLE, CITY_INPUT_PLACEHOLDER),
            notice: Notice::default(),
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;
        let result = self.start_loop(&mut terminal).await;

        self.cancel_token.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;

        terminal.show_cursor()?;
        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.render(terminal)?;
            if self.handle_next_event().await {
                return Ok(());
            }
        }
    }

    async fn handle_next_event(&mut self) -> bool {
        let event = self.events.next().await;
        match event {
            Event::Quit | Event::KeyboardEsc => return true,

            Event::TaskListReplaced(view) => self.app_state.set_view(view),
            Event::TaskInputCleared => {
                self.task_input = ui::inputs::build_input(TASK_INPUT_TITLE, TASK_INPUT_PLACEHOLDER)
            }
            Event::WeatherUpdated(text) => self.app_state.weather_text = text,
            Event::Notice(message) => self.notice.add_message(message),

            Event::KeyboardCtrlR => self.send_action(Action::ReloadTasks),
            Event::KeyboardCtrlC => self.clear_focused_input(),
            Event::KeyboardTab => self.app_state.focus = self.app_state.focus.next(),
            Event::KeyboardEnter => self.handle_enter(),
            Event::KeyboardPaste(text) => self.handle_paste(text),
            Event::KeyboardCharInput(input) => self.handle_char_input(input),

            Event::UiScrollUp => {
                if self.app_state.focus == Focus::Tasks {
                    self.app_state.select_prev();
                }
            }
            Event::UiScrollDown => {
                if self.app_state.focus == Focus::Tasks {
                    self.app_state.select_next();
                }
            }

            _ => {}
        }
        false
    }

    fn send_action(&self, action: Action) {
        if let Err(err) = self.action_tx.send(action) {
            log::error!("Failed to send action: {}", err);
        }
    }

    fn handle_enter(&mut self) {
        match self.app_state.focus {
            Focus::Tasks => self.toggle_selected(),
            Focus::NewTask => {
                let title = self.task_input.lines().join(" ");
                self.send_action(Action::SubmitTask(title));
            }
            Focus::City => {
                let city = self.city_input.lines().join(" ");
                self.send_action(Action::FetchWeather(city));
            }
        }
    }

    fn handle_paste(&mut self, text: String) {
        let input = match self.app_state.focus {
            Focus::NewTask => &mut self.task_input,
            Focus::City => &mut self.city_input,
            Focus::Tasks => return,
        };
        // The inputs are single-line; flatten pasted newlines
        input.set_yank_text(text.replace('\r', " ").replace('\n', " "));
        input.paste();
    }

    fn handle_char_input(&mut self, input: Input) {
        match self.app_state.focus {
            Focus::Tasks => match input.key {
                Key::Char('j') => self.app_state.select_next(),
                Key::Char('k') => self.app_state.select_prev(),
                Key::Char(' ') => self.toggle_selected(),
                Key::Char('d') | Key::Delete => self.remove_selected(),
                Key::Char('r') => self.send_action(Action::ReloadTasks),
                _ => {}
            },
            Focus::NewTask => {
                self.task_input.input(input);
            }
            Focus::City => {
                self.city_input.input(input);
            }
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(row) = self.app_state.selected_row() {
            self.send_action(Action::ToggleTask {
                id: row.id.clone(),
                status: row.status,
            });
        }
    }

    fn remove_selected(&mut self) {
        if let Some(row) = self.app_state.selected_row() {
            self.send_action(Action::RemoveTask(row.id.clone()));
        }
    }

    fn clear_focused_input(&mut self) {
        match self.app_state.focus {
            Focus::NewTask => {
                self.task_input = ui::inputs::build_input(TASK_INPUT_TITLE, TASK_INPUT_PLACEHOLDER)
            }
            Focus::City => {
                self.city_input = ui::inputs::build_input(CITY_INPUT_TITLE, CITY_INPUT_PLACEHOLDER)
            }
            Focus::Tasks => {}
        }
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let current_width = f.area().width;
            if current_width < MIN_WIDTH {
                f.render_widget(
                    Paragraph::new(format!(
                        "I'm too small, make me bigger! I need at least {} cells (current: {})",
                        MIN_WIDTH, current_width
                    ))
                    .wrap(Wrap { trim: true }),
                    f.area(),
                );
                return;
            }

            let weather_height = if self.app_state.weather_text.is_empty() {
                3
            } else {
                (self.app_state.weather_text.lines().count() as u16 + 2).min(10)
            };

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(weather_height),
                    Constraint::Length(1),
                ])
                .split(f.area());

            let focus = self.app_state.focus;
            ui::task_list::render(f, layout[0], &mut self.app_state, focus == Focus::Tasks);

            ui::inputs::set_focused(
                &mut self.task_input,
                TASK_INPUT_TITLE,
                focus == Focus::NewTask,
            );
            f.render_widget(&self.task_input, layout[1]);

            ui::inputs::set_focused(&mut self.city_input, CITY_INPUT_TITLE, focus == Focus::City);
            f.render_widget(&self.city_input, layout[2]);

            ui::weather_panel::render(f, layout[3], &self.app_state.weather_text);
            ui::help::render_help_line(f, layout[4], focus);

            self.notice.render(f, ui::utils::notice_area(f.area(), 30));
        })?;
        Ok(())
    }
}
