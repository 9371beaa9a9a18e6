use anyhow::{Context, Result};
use reqwest::{Client, Response, header::ACCEPT, multipart::Form};
use url::Url;

use super::constants::{ASTROLOGY_PATH, COMPATIBILITY_PATH};

/// Thin wrapper around the prediction backend's two multipart endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    astrology_url: Url,
    compatibility_url: Url,
}

impl BackendClient {
    pub fn new(base: &Url) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            astrology_url: base
                .join(ASTROLOGY_PATH)
                .context("Failed to build astrology endpoint")?,
            compatibility_url: base
                .join(COMPATIBILITY_PATH)
                .context("Failed to build compatibility endpoint")?,
        })
    }

    /// POST to `/astrology`, asking for JSON back. The caller owns the deadline.
    pub async fn astrology(&self, form: Form) -> reqwest::Result<Response> {
        self.http
            .post(self.astrology_url.clone())
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
    }

    /// POST to `/compatibility`.
    pub async fn compatibility(&self, form: Form) -> reqwest::Result<Response> {
        self.http
            .post(self.compatibility_url.clone())
            .multipart(form)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_joined_onto_the_base() {
        let base = Url::parse("http://localhost:5000").unwrap();
        let client = BackendClient::new(&base).unwrap();
        assert_eq!(client.astrology_url.as_str(), "http://localhost:5000/astrology");
        assert_eq!(
            client.compatibility_url.as_str(),
            "http://localhost:5000/compatibility"
        );
    }
}
