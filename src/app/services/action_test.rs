use std::sync::Arc;

use mockito::Matcher;
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;

use super::*;
use crate::models::{Task, TaskId, TaskStatus};
use crate::store::{MockTaskStore, RestStore, StoreError};
use crate::weather::{CurrentConditions, MockWeatherLookup};

fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        status,
        description: None,
    }
}

fn service_with(
    store: ArcStore,
    weather: ArcWeather,
) -> (ActionService, UnboundedReceiver<Event>) {
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let (_, action_rx) = mpsc::unbounded_channel::<Action>();
    let service = ActionService::new(
        Arc::new(event_tx),
        action_rx,
        store,
        weather,
        CancellationToken::new(),
    );
    (service, event_rx)
}

fn mock_service(
    store: MockTaskStore,
    weather: MockWeatherLookup,
) -> (ActionService, UnboundedReceiver<Event>) {
    service_with(Arc::new(store), Arc::new(weather))
}

fn drain_events(rx: &mut UnboundedReceiver<Event>) -> Vec<Event> {
    let mut events = vec![];
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn view_of(event: &Event) -> &TaskListView {
    match event {
        Event::TaskListReplaced(view) => view,
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_reload_publishes_one_row_per_task() {
    let mut store = MockTaskStore::new();
    store.expect_list().times(1).returning(|| {
        Box::pin(async {
            Ok(vec![
                task("1", "Buy milk", TaskStatus::Pending),
                task("2", "Ship crate", TaskStatus::Done),
            ])
        })
    });

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service.handle(Action::ReloadTasks).await.unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    let rows = view_of(&events[0]).rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "Buy milk (pending)");
    assert_eq!(rows[0].toggle_label, "Done");
    assert_eq!(rows[1].label, "Ship crate (done)");
    assert_eq!(rows[1].toggle_label, "Undo");
}

#[tokio::test]
async fn test_reload_malformed_payload_shows_placeholder() {
    let mut store = MockTaskStore::new();
    store.expect_list().times(1).returning(|| {
        Box::pin(async {
            Err(StoreError::UnexpectedPayload {
                payload: json!({"detail": "boom"}),
            })
        })
    });

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service.handle(Action::ReloadTasks).await.unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(
        view_of(&events[0]),
        &TaskListView::Placeholder(MALFORMED_LIST_TEXT)
    );
}

#[tokio::test]
async fn test_reload_request_failure_shows_placeholder() {
    let mut store = MockTaskStore::new();
    store.expect_list().times(1).returning(|| {
        Box::pin(async { Err(StoreError::Request(eyre::eyre!("connection refused"))) })
    });

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service.handle(Action::ReloadTasks).await.unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(
        view_of(&events[0]),
        &TaskListView::Placeholder(LOAD_FAILED_TEXT)
    );
}

#[tokio::test]
async fn test_submit_blank_title_prompts_without_requests() {
    // No expectations on the store: any request would fail the test
    let (service, mut rx) = mock_service(MockTaskStore::new(), MockWeatherLookup::new());
    service
        .handle(Action::SubmitTask("  \t ".to_string()))
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    match &events[0] {
        Event::Notice(notice) => assert_eq!(notice.message(), "Enter a task"),
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_trims_creates_and_reloads() {
    let mut store = MockTaskStore::new();
    store
        .expect_create()
        .times(1)
        .withf(|new_task| new_task.title == "Buy milk")
        .returning(|_| Box::pin(async { Ok(()) }));
    store
        .expect_list()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service
        .handle(Action::SubmitTask("  Buy milk  ".to_string()))
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], Event::TaskInputCleared));
    assert!(view_of(&events[1]).rows().is_empty());
}

#[tokio::test]
async fn test_submit_failure_still_clears_and_reloads() {
    let mut store = MockTaskStore::new();
    store.expect_create().times(1).returning(|_| {
        Box::pin(async { Err(StoreError::Request(eyre::eyre!("connection refused"))) })
    });
    store
        .expect_list()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service
        .handle(Action::SubmitTask("Buy milk".to_string()))
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], Event::TaskInputCleared));
    assert!(matches!(events[1], Event::TaskListReplaced(_)));
}

#[tokio::test]
async fn test_toggle_done_becomes_pending() {
    let mut store = MockTaskStore::new();
    store
        .expect_set_status()
        .times(1)
        .withf(|id, status| id.as_str() == "9" && *status == TaskStatus::Pending)
        .returning(|_, _| Box::pin(async { Ok(()) }));
    store
        .expect_list()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service
        .handle(Action::ToggleTask {
            id: TaskId::new("9"),
            status: TaskStatus::Done,
        })
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::TaskListReplaced(_)));
}

#[tokio::test]
async fn test_toggle_pending_becomes_done() {
    let mut store = MockTaskStore::new();
    store
        .expect_set_status()
        .times(1)
        .withf(|id, status| id.as_str() == "9" && *status == TaskStatus::Done)
        .returning(|_, _| Box::pin(async { Ok(()) }));
    store
        .expect_list()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service
        .handle(Action::ToggleTask {
            id: TaskId::new("9"),
            status: TaskStatus::Pending,
        })
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn test_toggle_failure_still_reloads() {
    let mut store = MockTaskStore::new();
    store.expect_set_status().times(1).returning(|_, _| {
        Box::pin(async { Err(StoreError::Request(eyre::eyre!("connection refused"))) })
    });
    store
        .expect_list()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service
        .handle(Action::ToggleTask {
            id: TaskId::new("9"),
            status: TaskStatus::Pending,
        })
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::TaskListReplaced(_)));
}

#[tokio::test]
async fn test_remove_then_reload() {
    let mut store = MockTaskStore::new();
    store
        .expect_remove()
        .times(1)
        .withf(|id| id.as_str() == "3")
        .returning(|_| Box::pin(async { Ok(()) }));
    store
        .expect_list()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (service, mut rx) = mock_service(store, MockWeatherLookup::new());
    service
        .handle(Action::RemoveTask(TaskId::new("3")))
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::TaskListReplaced(_)));
}

#[tokio::test]
async fn test_weather_blank_city_prompts_without_requests() {
    let (service, mut rx) = mock_service(MockTaskStore::new(), MockWeatherLookup::new());
    service
        .handle(Action::FetchWeather("   ".to_string()))
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    match &events[0] {
        Event::Notice(notice) => assert_eq!(notice.message(), "Enter a city"),
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_weather_city_not_found() {
    let mut weather = MockWeatherLookup::new();
    weather
        .expect_current_report()
        .times(1)
        .withf(|city| city.as_str() == "atlantis")
        .returning(|_| Box::pin(async { Ok(WeatherReport::CityNotFound) }));

    let (service, mut rx) = mock_service(MockTaskStore::new(), weather);
    service
        .handle(Action::FetchWeather("atlantis".to_string()))
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    match &events[0] {
        Event::WeatherUpdated(text) => assert_eq!(text, "City not found."),
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_weather_report_displayed() {
    let mut weather = MockWeatherLookup::new();
    weather.expect_current_report().times(1).returning(|_| {
        Box::pin(async {
            Ok(WeatherReport::Current(CurrentConditions(
                json!({"temperature_2m": 18.3, "wind_speed_10m": 7.2}),
            )))
        })
    });

    let (service, mut rx) = mock_service(MockTaskStore::new(), weather);
    service
        .handle(Action::FetchWeather("Berlin".to_string()))
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    match &events[0] {
        Event::WeatherUpdated(text) => {
            assert!(text.contains("temperature_2m"));
            assert!(text.contains("18.3"));
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_weather_failure_raises_notice() {
    let mut weather = MockWeatherLookup::new();
    weather
        .expect_current_report()
        .times(1)
        .returning(|_| Box::pin(async { Err(eyre::eyre!("boom")) }));

    let (service, mut rx) = mock_service(MockTaskStore::new(), weather);
    service
        .handle(Action::FetchWeather("Berlin".to_string()))
        .await
        .unwrap();

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    match &events[0] {
        Event::Notice(notice) => assert!(notice.message().contains("Weather lookup failed")),
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_toggle_roundtrip_against_rest_store() {
    let mut server = mockito::Server::new_async().await;
    let list_handler = server
        .mock("GET", "/tasks")
        .with_status(200)
        .with_body(json!([{"id": 1, "title": "Buy milk", "status": "pending"}]).to_string())
        .expect(2)
        .create();
    let update_handler = server
        .mock("PUT", "/tasks/1")
        .match_body(Matcher::Json(json!({"status": "done"})))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();

    let store: ArcStore = Arc::new(RestStore::default().with_endpoint(&server.url()));
    let (service, mut rx) = service_with(store, Arc::new(MockWeatherLookup::new()));

    // The page-load fetch
    service.handle(Action::ReloadTasks).await.unwrap();
    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    let rows = view_of(&events[0]).rows().to_vec();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "Buy milk (pending)");
    assert_eq!(rows[0].toggle_label, "Done");

    // Toggling the row updates the store, then reloads exactly once
    service
        .handle(Action::ToggleTask {
            id: rows[0].id.clone(),
            status: rows[0].status,
        })
        .await
        .unwrap();
    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::TaskListReplaced(_)));

    update_handler.assert();
    list_handler.assert();
}
