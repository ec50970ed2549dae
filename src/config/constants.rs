use std::time::Duration;

/// Default task store endpoint (the backend's dev server default).
pub const STORE_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Open-Meteo geocoding service (free, no key).
pub const GEOCODING_ENDPOINT: &str = "https://geocoding-api.open-meteo.com";

/// Open-Meteo forecast service.
pub const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com";

pub const LOG_FILE_PATH: &str = "/tmp/tasky.log";

/// UI redraw tick when no input arrives.
pub const FRAME_DURATION: Duration = Duration::from_millis(100);
