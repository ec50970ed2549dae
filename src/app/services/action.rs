#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use crate::models::{
    Action, ArcEventTx, Event, LOAD_FAILED_TEXT, MALFORMED_LIST_TEXT, NewTask, NoticeMessage,
    TaskListView,
};
use crate::store::ArcStore;
use crate::weather::{ArcWeather, WeatherReport};
use eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Drives the task view. Every user intent lands here and every display
/// change leaves here as an event; mutations always finish with a full
/// reload of the list, whatever the store said about the mutation itself.
pub struct ActionService {
    event_tx: ArcEventTx,
    action_rx: mpsc::UnboundedReceiver<Action>,
    cancel_token: CancellationToken,
    store: ArcStore,
    weather: ArcWeather,
}

impl ActionService {
    pub fn new(
        event_tx: ArcEventTx,
        action_rx: mpsc::UnboundedReceiver<Action>,
        store: ArcStore,
        weather: ArcWeather,
        cancel_token: CancellationToken,
    ) -> ActionService {
        ActionService {
            event_tx,
            action_rx,
            cancel_token,
            store,
            weather,
        }
    }

    /// Actions are served one at a time, in arrival order. The displayed
    /// state is simply whichever reload completed last.
    pub async fn start(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::debug!("Action service cancelled");
                    return Ok(());
                }

                action = self.action_rx.recv() => {
                    let action = match action {
                        Some(action) => action,
                        None => continue,
                    };
                    self.handle(action).await?;
                }
            }
        }
    }

    async fn handle(&self, action: Action) -> Result<()> {
        match action {
            Action::ReloadTasks => self.reload().await,

            Action::SubmitTask(title) => self.submit_task(title).await,

            Action::ToggleTask { id, status } => {
                if let Err(err) = self.store.set_status(id.clone(), status.toggled()).await {
                    log::error!("Failed to update task {}: {}", id, err);
                }
                self.reload().await
            }

            Action::RemoveTask(id) => {
                if let Err(err) = self.store.remove(id.clone()).await {
                    log::error!("Failed to delete task {}: {}", id, err);
                }
                self.reload().await
            }

            Action::FetchWeather(city) => self.fetch_weather(city).await,
        }
    }

    /// The reload cycle: re-fetch everything and replace the list
    /// wholesale. The two recognized failure kinds map to distinct
    /// placeholders; neither is retried.
    async fn reload(&self) -> Result<()> {
        let view = match self.store.list().await {
            Ok(tasks) => TaskListView::from_tasks(&tasks),
            Err(err) if err.is_payload_error() => {
                log::error!("Unexpected response from task store: {}", err);
                TaskListView::Placeholder(MALFORMED_LIST_TEXT)
            }
            Err(err) => {
                log::error!("Failed to load tasks: {}", err);
                TaskListView::Placeholder(LOAD_FAILED_TEXT)
            }
        };

        self.event_tx.send(Event::TaskListReplaced(view)).await?;
        Ok(())
    }

    async fn submit_task(&self, title: String) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            self.event_tx
                .send(Event::Notice(NoticeMessage::warning("Enter a task")))
                .await?;
            return Ok(());
        }

        // No error branch: the reload below shows whatever state the
        // store actually ended up in.
        if let Err(err) = self.store.create(NewTask::new(title)).await {
            log::error!("Failed to create task: {}", err);
        }

        self.event_tx.send(Event::TaskInputCleared).await?;
        self.reload().await
    }

    async fn fetch_weather(&self, city: String) -> Result<()> {
        let city = city.trim();
        if city.is_empty() {
            self.event_tx
                .send(Event::Notice(NoticeMessage::warning("Enter a city")))
                .await?;
            return Ok(());
        }

        let text = match self.weather.current_report(city.to_string()).await {
            Ok(WeatherReport::CityNotFound) => "City not found.".to_string(),
            Ok(WeatherReport::Current(conditions)) => conditions.to_string(),
            Err(err) => {
                log::error!("Weather lookup failed: {}", err);
                self.event_tx
                    .send(Event::Notice(NoticeMessage::error(format!(
                        "Weather lookup failed: {}",
                        err
                    ))))
                    .await?;
                return Ok(());
            }
        };

        self.event_tx.send(Event::WeatherUpdated(text)).await?;
        Ok(())
    }
}
