//! HTTP client for the order API: order creation with bounded retry and
//! status verification with bounded polling.
//!
//! Retry rules, per endpoint:
//! - `POST /api/orders/`: 4xx is final, 5xx and transport failures are retried
//!   up to the configured bound with a fixed delay.
//! - `GET /api/orders/{id}/status`: a non-terminal status keeps polling; 400
//!   and 404 are final; 5xx and transport failures count as one more
//!   non-terminal attempt.

use std::fmt::{self, Display};
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use uuid::Uuid;

use crate::models::{OrderCreated, OrderRequest, OrderStatus};
use crate::settings::Settings;

/// Shown whenever the server gives us nothing better.
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later";

/// Attempt bounds and fixed delays for both loops, lifted out of [`Settings`]
/// so tests can run with millisecond delays.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub create_max_retries: u32,
    pub create_retry_delay: Duration,
    pub poll_max_attempts: u32,
    pub poll_delay: Duration,
}

impl RetryPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            create_max_retries: settings.create_max_retries,
            create_retry_delay: Duration::from_millis(settings.create_retry_delay_ms),
            poll_max_attempts: settings.poll_max_attempts,
            poll_delay: Duration::from_millis(settings.poll_delay_ms),
        }
    }
}

/// Errors surfaced by the order API client. `Display` is the user-facing
/// message shown in the toast.
#[derive(Debug)]
pub enum OrderApiError {
    /// The server turned the request down (4xx); not retried.
    Rejected(String),
    /// The server kept failing (5xx or no response) until the retry bound.
    Server(String),
    /// A response body could not be decoded.
    Decode(String),
    /// 404 while verifying: the order the server just created is gone.
    NotFound,
    /// Poll attempts exhausted without a terminal status.
    Timeout,
}

impl Display for OrderApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderApiError::Rejected(msg) | OrderApiError::Server(msg) => write!(f, "{msg}"),
            OrderApiError::Decode(_) => write!(f, "{DEFAULT_ERROR_MESSAGE}"),
            OrderApiError::NotFound => {
                write!(f, "Order verification failed: order not found")
            }
            OrderApiError::Timeout => {
                write!(f, "Order processing timed out. Please try again later")
            }
        }
    }
}

impl std::error::Error for OrderApiError {}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    policy: RetryPolicy,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            policy,
        }
    }

    /// Submit a new order. Returns the server-assigned id needed for status
    /// verification.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderCreated, OrderApiError> {
        let url = format!("{}/api/orders/", self.base_url);
        let max = self.policy.create_max_retries;
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let last = attempt >= max;
            match self.http.post(&url).json(order).send().await {
                Ok(resp) if resp.status().is_success() => {
                    return resp
                        .json::<OrderCreated>()
                        .await
                        .map_err(|err| OrderApiError::Decode(err.to_string()));
                }
                Ok(resp) if resp.status().is_client_error() => {
                    return Err(OrderApiError::Rejected(error_detail(resp).await));
                }
                Ok(resp) => {
                    log::warn!(
                        "create order attempt {attempt}/{max} got HTTP {}",
                        resp.status()
                    );
                    if last {
                        return Err(OrderApiError::Server(error_detail(resp).await));
                    }
                }
                Err(err) => {
                    log::warn!("create order attempt {attempt}/{max} failed: {err}");
                    if last {
                        return Err(OrderApiError::Server(DEFAULT_ERROR_MESSAGE.to_string()));
                    }
                }
            }
            tokio::time::sleep(self.policy.create_retry_delay).await;
        }
    }

    /// Poll the order's status until it reaches a terminal state or the
    /// attempt bound runs out.
    pub async fn poll_status(&self, order_id: Uuid) -> Result<OrderStatus, OrderApiError> {
        let url = format!("{}/api/orders/{}/status", self.base_url, order_id);
        let attempts = self.policy.poll_max_attempts;
        for attempt in 1..=attempts {
            match self.http.get(&url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    match resp.json::<OrderStatus>().await {
                        Ok(status) if status.status.is_terminal() => return Ok(status),
                        Ok(status) => log::debug!(
                            "order {order_id} still {} (attempt {attempt}/{attempts})",
                            status.status
                        ),
                        Err(err) => {
                            log::warn!("undecodable status body for order {order_id}: {err}")
                        }
                    }
                }
                Ok(resp) if resp.status() == StatusCode::BAD_REQUEST => {
                    return Err(OrderApiError::Rejected(error_detail(resp).await));
                }
                Ok(resp) if resp.status() == StatusCode::NOT_FOUND => {
                    return Err(OrderApiError::NotFound);
                }
                Ok(resp) => log::warn!(
                    "status poll attempt {attempt}/{attempts} got HTTP {}",
                    resp.status()
                ),
                Err(err) => log::warn!("status poll attempt {attempt}/{attempts} failed: {err}"),
            }
            if attempt < attempts {
                tokio::time::sleep(self.policy.poll_delay).await;
            }
        }
        Err(OrderApiError::Timeout)
    }
}

/// Error bodies carry an optional `{"detail": "..."}`; anything else falls
/// back to the default message.
async fn error_detail(resp: Response) -> String {
    match resp.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("detail")
            .and_then(|detail| detail.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        Err(_) => DEFAULT_ERROR_MESSAGE.to_string(),
    }
}
