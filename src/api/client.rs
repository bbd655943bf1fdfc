use crate::api::models::UsersPage;
use crate::core::traits::{FetchOutcome, PageSource};
use crate::error::{AppError, ConfigError, FetchError};
use crate::utils::error_helpers::{convert_json_error, convert_transport_error};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("reqres-client/", env!("CARGO_PKG_VERSION"));
const PAGE_PARAM: &str = "page";

/// Fetches single pages of the user listing.
///
/// Holds only construction-time configuration, so one instance can serve
/// any number of `fetch_page` calls.
#[derive(Debug, Clone)]
pub struct UserClient {
    client: Client,
    base_url: Url,
}

impl UserClient {
    // Create client with the default request timeout
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("not a valid absolute URL: {}", e),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport {
                detail: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(UserClient { client, base_url })
    }

    /// Base URL with `page=<page>` appended. Existing query pairs are kept,
    /// except a previous `page` pair, which is replaced.
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != PAGE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &retained {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(PAGE_PARAM, &page.to_string());
        }
        url
    }

    /// Issue one GET for `page` and interpret the response.
    ///
    /// Only status 200 counts as success. Any other status is reported with
    /// the raw body; a 200 whose body lacks a `data` array is malformed.
    pub async fn fetch_page(&self, page: u32) -> FetchOutcome {
        let url = self.page_url(page);
        info!("Fetching users from: {}", url);

        let outcome = self.send(url).await;
        match &outcome {
            Ok(users) => info!(
                "Successfully fetched {} users from page {}",
                users.len(),
                page
            ),
            Err(e) => warn!("Failed to fetch users from page {}: {}", page, e),
        }
        outcome
    }

    async fn send(&self, url: Url) -> FetchOutcome {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(convert_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(convert_transport_error)?;

        if status != StatusCode::OK {
            return Err(FetchError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        let users_page: UsersPage = serde_json::from_str(&body).map_err(convert_json_error)?;
        Ok(users_page.data)
    }
}

#[async_trait]
impl PageSource for UserClient {
    async fn fetch_page(&self, page: u32) -> FetchOutcome {
        UserClient::fetch_page(self, page).await
    }
}
