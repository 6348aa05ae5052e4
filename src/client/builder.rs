use super::nomalab::NomalabClient;
use crate::errors::BuildError;
use crate::types::{resolve_origin, Context, SessionToken, SESSION_COOKIE};
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, COOKIE};
use reqwest_middleware::Middleware;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// How the session token is sent to the API.
///
/// Deployments of the API differ in which one they read, so by default both are sent.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum AuthMode {
    /// `Authorization: Bearer <token>`
    Bearer,
    /// `Cookie: sessionJwt=<token>`
    Cookie,
    /// Both of the above.
    #[default]
    Both,
}

impl AuthMode {
    pub(crate) fn sends_bearer(self) -> bool {
        matches!(self, AuthMode::Bearer | AuthMode::Both)
    }

    pub(crate) fn sends_cookie(self) -> bool {
        matches!(self, AuthMode::Cookie | AuthMode::Both)
    }

    /// Headers carrying the token.
    pub(crate) fn headers(self, token: &SessionToken) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        if self.sends_bearer() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        if self.sends_cookie() {
            let mut value =
                HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, token.as_str()))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }
        Ok(headers)
    }
}

/// Builder for [NomalabClient].
///
/// Without a [Context] the API origin is relative, which is how the client is
/// used when embedded in a page served by Nomalab: the base URL of that page
/// must then be given with [NomalabClientBuilder::embedded_at].
#[derive(Default)]
pub struct NomalabClientBuilder {
    context: Option<Context>,
    token: Option<SessionToken>,
    auth_mode: AuthMode,
    strict_handshake: bool,
    embed_mode: bool,
    base: Option<Url>,
    timeout: Option<Duration>,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl NomalabClientBuilder {
    /// Environment to talk to.
    pub fn context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// API token or session token.
    pub fn token(mut self, token: impl Into<SessionToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn auth_mode(mut self, auth_mode: AuthMode) -> Self {
        self.auth_mode = auth_mode;
        self
    }

    /// Fail organization switches which do not return a session cookie,
    /// instead of keeping the current token.
    pub fn strict_handshake(mut self, strict: bool) -> Self {
        self.strict_handshake = strict;
        self
    }

    /// Keep cookies set by the API and send them back, like a browser does
    /// for requests with credentials included.
    pub fn embed_mode(mut self, embed: bool) -> Self {
        self.embed_mode = embed;
        self
    }

    /// Base URL against which relative API URLs are resolved when no context is set.
    pub fn embedded_at(mut self, base: Url) -> Self {
        self.base = Some(base);
        self
    }

    /// Timeout of each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: Middleware>(mut self, middleware: M) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Result<NomalabClient, BuildError> {
        let origin = resolve_origin(self.context.as_ref());
        if origin.is_empty() && self.base.is_none() {
            return Err(BuildError::MissingOrigin);
        }
        if let Some(token) = &self.token {
            self.auth_mode.headers(token)?;
        }
        let cookies = self.embed_mode.then(|| Arc::new(Jar::default()));
        let mut builder = reqwest::ClientBuilder::new().default_headers(default_headers());
        if let Some(jar) = &cookies {
            builder = builder.cookie_provider(Arc::clone(jar));
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = self
            .middlewares
            .into_iter()
            .fold(
                reqwest_middleware::ClientBuilder::new(builder.build()?),
                |builder, middleware| builder.with_arc(middleware),
            )
            .build();
        let client = NomalabClient::new(
            client,
            origin,
            self.base,
            self.context,
            self.token.clone(),
            self.auth_mode,
            self.strict_handshake,
            cookies,
        );
        if let Some(token) = &self.token {
            client.store_session_cookie(token)?;
        }
        Ok(client)
    }
}

fn default_headers() -> HeaderMap {
    HeaderMap::from_iter([(
        reqwest::header::USER_AGENT,
        HeaderValue::from_static(concat!("nomalab-rs/", env!("CARGO_PKG_VERSION"))),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(AuthMode::Bearer, Some("Bearer abc"), None)]
    #[case(AuthMode::Cookie, None, Some("sessionJwt=abc"))]
    #[case(AuthMode::Both, Some("Bearer abc"), Some("sessionJwt=abc"))]
    fn test_auth_headers(
        #[case] mode: AuthMode,
        #[case] authorization: Option<&str>,
        #[case] cookie: Option<&str>,
    ) {
        let headers = mode.headers(&SessionToken::new("abc")).unwrap();
        let get = |name: reqwest::header::HeaderName| {
            headers.get(name).map(|v| v.to_str().unwrap())
        };
        assert_eq!(get(AUTHORIZATION), authorization);
        assert_eq!(get(COOKIE), cookie);
        assert!(headers.values().all(HeaderValue::is_sensitive));
    }

    #[rstest]
    fn test_reject_token_with_newline() {
        assert!(AuthMode::Both
            .headers(&SessionToken::new("abc\ndef"))
            .is_err());
    }

    #[rstest]
    fn test_missing_origin() {
        assert!(matches!(
            NomalabClient::builder().build().unwrap_err(),
            BuildError::MissingOrigin
        ));
    }

    #[rstest]
    fn test_relative_origin_when_embedded() {
        let client = NomalabClient::builder()
            .embedded_at("http://localhost:8080/".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(client.origin(), "");
        assert_eq!(
            client.api_url("shows/s1").unwrap().as_str(),
            "http://localhost:8080/v3/shows/s1"
        );
    }

    #[rstest]
    #[case("www", "https://app.nomalab.com/v3/users/me")]
    #[case("staging", "https://app-staging.nomalab.com/v3/users/me")]
    fn test_context_wins_over_embedding(#[case] context: &str, #[case] expected: &str) {
        let client = NomalabClient::builder()
            .context(context.parse().unwrap())
            .embedded_at("http://localhost:8080/".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(client.api_url("users/me").unwrap().as_str(), expected);
    }
}
