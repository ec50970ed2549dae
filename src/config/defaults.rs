use super::constants::*;

pub(crate) fn log_level() -> Option<String> {
    Some("info".to_string())
}

pub(crate) fn log_file_path() -> String {
    LOG_FILE_PATH.to_string()
}

pub(crate) fn store_endpoint() -> String {
    STORE_ENDPOINT.to_string()
}

pub(crate) fn geocoding_endpoint() -> String {
    GEOCODING_ENDPOINT.to_string()
}

pub(crate) fn forecast_endpoint() -> String {
    FORECAST_ENDPOINT.to_string()
}
