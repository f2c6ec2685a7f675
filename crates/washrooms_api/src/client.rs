use std::env;

use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::{ApiError, ApiResult};

/// Where to reach the backend. Built once at the edge (usually from the
/// environment) and passed in explicitly; nothing in this crate reads
/// configuration after startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new<S>(base_url: S) -> Self
    where
        S: Into<String>,
    {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn env() -> Self {
        let base_url =
            env::var("WASHROOM_API_URL").expect("Expected WASHROOM_API_URL.");
        Self::new(base_url)
    }
}

#[derive(Debug, Clone)]
pub struct WashroomApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl WashroomApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url,
            endpoint.trim_start_matches('/')
        )
    }

    pub(crate) async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("GET {url}");
        Self::expect_json(url.clone(), self.http.get(&url)).await
    }

    pub(crate) async fn get_with_query<T, Q>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        debug!("GET {url} (with query)");
        Self::expect_json(url.clone(), self.http.get(&url).query(query)).await
    }

    pub(crate) async fn post<B, T>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("POST {url}");
        Self::expect_json(url.clone(), self.http.post(&url).json(body)).await
    }

    pub(crate) async fn put<B, T>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("PUT {url}");
        Self::expect_json(url.clone(), self.http.put(&url).json(body)).await
    }

    pub(crate) async fn patch<B, T>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("PATCH {url}");
        Self::expect_json(url.clone(), self.http.patch(&url).json(body)).await
    }

    pub(crate) async fn delete<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("DELETE {url}");
        Self::expect_json(url.clone(), self.http.delete(&url)).await
    }

    async fn expect_json<T>(
        url: String,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            reqwest::StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            other => match response.text().await {
                Ok(text) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: Some(text),
                }),
                Err(_) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: None,
                }),
            },
        }
    }
}
