// Shared test utilities for orderdesk tests
use std::time::Duration;

use orderdesk::api::{ApiClient, RetryPolicy};
use orderdesk::settings::Settings;

/// Client pointed at a mock server, with millisecond delays so the retry and
/// poll bounds run quickly.
pub fn test_client(base_url: &str, create_max_retries: u32, poll_max_attempts: u32) -> ApiClient {
    ApiClient::new(
        base_url,
        RetryPolicy {
            create_max_retries,
            create_retry_delay: Duration::from_millis(10),
            poll_max_attempts,
            poll_delay: Duration::from_millis(10),
        },
    )
}

/// Settings with the shipped defaults, for code paths that take the whole
/// struct (validation bounds in particular).
pub fn test_settings() -> Settings {
    Settings {
        api_base_url: "http://127.0.0.1:8000".to_string(),
        log_level: "info".to_string(),
        create_max_retries: 10,
        create_retry_delay_ms: 500,
        poll_max_attempts: 20,
        poll_delay_ms: 250,
        phone_min_digits: 7,
        phone_max_digits: 15,
        toast_duration_ms: 3500,
    }
}
