//! Construction and dispatch of one authenticated request.

use super::nomalab::NomalabClient;
use crate::errors::{check, NomalabError};
use crate::types::{SessionToken, SESSION_COOKIE};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Content type of requests unless overridden.
pub const JSON: &str = "application/json";

/// Everything about a request other than its path.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Method,
    body: Option<serde_json::Value>,
    content_type: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// Send `body` serialized as JSON.
    pub fn with_json(self, body: &impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(Self {
            body: Some(serde_json::to_value(body)?),
            ..self
        })
    }

    /// Override the `Content-Type` header.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            ..self
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(JSON)
    }
}

impl NomalabClient {
    /// The URL of an API path, e.g. `https://app.nomalab.com/v3/users/me`.
    pub fn api_url(&self, path: &str) -> Result<Url, NomalabError> {
        Ok(self.resolve(path)?)
    }

    fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        let target = format!("{}/v3/{}", self.origin, path);
        match &self.base {
            Some(base) if self.origin.is_empty() => base.join(&target),
            _ => Url::parse(&target),
        }
    }

    /// In embed mode, put the session token in the cookie store so that it is
    /// sent along with the other cookies of the API.
    pub(crate) fn store_session_cookie(
        &self,
        token: &SessionToken,
    ) -> Result<(), url::ParseError> {
        if !self.auth_mode.sends_cookie() {
            return Ok(());
        }
        if let Some(jar) = &self.cookies {
            let cookie = format!("{}={}; Path=/", SESSION_COOKIE, token.as_str());
            jar.add_cookie_str(&cookie, &self.resolve("")?);
        }
        Ok(())
    }

    /// Send a request as the given session, without looking at the response.
    pub(crate) async fn send(
        &self,
        token: Option<&SessionToken>,
        path: &str,
        options: &RequestOptions,
    ) -> Result<reqwest::Response, NomalabError> {
        let url = self.api_url(path)?;
        log::debug!("{} {}", options.method, url);
        let mut req = self
            .client
            .request(options.method.clone(), url)
            .header(CONTENT_TYPE, options.content_type());
        if let Some(token) = token {
            let mut headers = self.auth_mode.headers(token)?;
            if self.cookies.is_some() {
                // a Cookie header would replace the cookie store
                headers.remove(COOKIE);
            }
            req = req.headers(headers);
        }
        if let Some(body) = &options.body {
            req = req.body(serde_json::to_vec(body)?);
        }
        Ok(req.send().await?)
    }

    /// Send a request as the current session. Error responses are described by `message`.
    pub(crate) async fn fetch(
        &self,
        path: &str,
        options: RequestOptions,
        message: impl Into<String>,
    ) -> Result<reqwest::Response, NomalabError> {
        let token = self.session.lock().await.clone();
        let res = self.send(token.as_ref(), path, &options).await?;
        check(res, message).await
    }

    /// Send a request and decode its JSON response.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        message: impl Into<String>,
    ) -> Result<T, NomalabError> {
        let res = self.fetch(path, options, message).await?;
        json(res).await
    }
}

/// Decode a JSON response. No content is decoded as `null`, so that `()` and
/// [Option] can be used for endpoints which may not return anything.
pub(crate) async fn json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, NomalabError> {
    if res.status() == StatusCode::NO_CONTENT {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    let body = res.bytes().await?;
    if body.is_empty() {
        Ok(serde_json::from_value(serde_json::Value::Null)?)
    } else {
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RequestOptions::default();
        assert_eq!(options.method(), &Method::GET);
        assert_eq!(options.content_type(), JSON);
        assert!(options.body.is_none());
    }

    #[test]
    fn test_content_type_override() {
        let options = RequestOptions::get().with_content_type("application/xml");
        assert_eq!(options.content_type(), "application/xml");
    }

    #[test]
    fn test_json_body() {
        let options = RequestOptions::post()
            .with_json(&serde_json::json!({"organization": "o1"}))
            .unwrap();
        assert_eq!(options.method(), &Method::POST);
        assert_eq!(options.body.unwrap()["organization"], "o1");
    }
}
