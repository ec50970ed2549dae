use std::sync::Arc;

use eyre::Result;
use tasky::app::services::{ActionService, EventService};
use tasky::app::{App, destruct_terminal_for_panic};
use tasky::cli::Command;
use tasky::config::{Configuration, init_logger, verbose};
use tasky::models::{Action, ArcEventTx};
use tasky::store::new_store;
use tasky::weather::new_weather;
use tokio::{sync::mpsc, task};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    Configuration::init(config.clone())?;
    init_logger(&config.log)?;
    verbose!("[+] Logger initialized");

    let store = new_store(&config.store);
    verbose!("[+] Task store: {}", config.store.endpoint);

    let weather = new_weather(&config.weather);

    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let mut events = EventService::default();

    let token = CancellationToken::new();
    let mut task_set = task::JoinSet::new();

    let event_tx: ArcEventTx = Arc::new(events.event_tx());
    let mut action_service =
        ActionService::new(event_tx, action_rx, store, weather, token.clone());
    task_set.spawn(async move { action_service.start().await });

    // The page-load fetch
    action_tx.send(Action::ReloadTasks)?;

    let mut app = App::new(action_tx, &mut events, token.clone());
    if let Err(err) = app.run().await {
        eprintln!("Error: {}", err);
    }

    token.cancel();
    task_set.abort_all();
    while let Some(res) = task_set.join_next().await {
        match res {
            Ok(_) => {}
            Err(err) if err.is_cancelled() => {}
            Err(err) => log::error!("Task error: {}", err),
        }
    }

    Ok(())
}
