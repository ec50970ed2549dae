use crate::{config::constants::FRAME_DURATION, models::Event};
use crossterm::event::{Event as CrosstermEvent, EventStream};
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::{Input, Key};

use super::CrosstermStream;

/// Merges terminal input, events published by the services, and a redraw
/// tick into one stream the app loop consumes.
pub struct EventService {
    term_stream: Box<dyn CrosstermStream>,
    event_rx: mpsc::UnboundedReceiver<Event>,
    event_tx: mpsc::UnboundedSender<Event>,
}

impl EventService {
    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => Some(Event::KeyboardPaste(text)),
            CrosstermEvent::Key(key_event) => {
                let input: Input = key_event.into();
                if input.ctrl {
                    return match input.key {
                        Key::Char('q') => Some(Event::Quit),
                        Key::Char('c') => Some(Event::KeyboardCtrlC),
                        Key::Char('r') => Some(Event::KeyboardCtrlR),
                        _ => None,
                    };
                }

                match input.key {
                    Key::Esc => Some(Event::KeyboardEsc),
                    Key::Enter => Some(Event::KeyboardEnter),
                    Key::Tab => Some(Event::KeyboardTab),
                    Key::Up => Some(Event::UiScrollUp),
                    Key::Down => Some(Event::UiScrollDown),
                    _ => Some(Event::KeyboardCharInput(input)),
                }
            }
            _ => None,
        }
    }

    pub fn event_tx(&self) -> mpsc::UnboundedSender<Event> {
        self.event_tx.clone()
    }

    pub async fn next(&mut self) -> Event {
        loop {
            let e = tokio::select! {
                event = self.event_rx.recv() => event,
                event = self.term_stream.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(FRAME_DURATION) => Some(Event::UiTick)
            };

            if let Some(event) = e {
                return event;
            }
        }
    }
}

impl Default for EventService {
    fn default() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
        Self {
            term_stream: Box::new(EventStream::new()),
            event_rx,
            event_tx,
        }
    }
}
