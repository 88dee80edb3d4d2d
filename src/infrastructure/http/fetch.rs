#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;

use reqwest::header;
use reqwest::RequestBuilder;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::domain::models::FetchError;

fn parse_url(url: &str) -> Result<Url, FetchError> {
    return Url::parse(url).map_err(|err| {
        return FetchError::InvalidUrl {
            url: url.to_string(),
            reason: err.to_string(),
        };
    });
}

/// Single-shot JSON over HTTP. Every call is one request with no retry and no
/// timeout; the full body is read before it is parsed.
#[derive(Clone, Default)]
pub struct Fetch {
    client: reqwest::Client,
}

impl Fetch {
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let req = self.client.get(parse_url(url)?);
        return self.send("GET", url, req).await;
    }

    /// `body` is sent as is, so it must already be serialized JSON.
    pub async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<String>,
    ) -> Result<T, FetchError> {
        let mut req = self.client.post(parse_url(url)?);
        if let Some(json) = body {
            req = req.header(header::CONTENT_TYPE, "application/json").body(json);
        }

        return self.send("POST", url, req).await;
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        req: RequestBuilder,
    ) -> Result<T, FetchError> {
        let res = req.send().await.map_err(|err| {
            return FetchError::Transport {
                method,
                url: url.to_string(),
                source: err,
            };
        })?;

        let status = res.status();
        tracing::debug!(method, url, status = status.as_u16(), "Backend response");

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let text = res.text().await.map_err(|err| {
            return FetchError::Transport {
                method,
                url: url.to_string(),
                source: err,
            };
        })?;

        return serde_json::from_str::<T>(&text).map_err(|err| {
            tracing::debug!(method, url, body = %text, "Unexpected response body");
            return FetchError::Decode {
                method,
                url: url.to_string(),
                source: err,
            };
        });
    }
}
