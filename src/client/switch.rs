//! Organization switch handshake.
//!
//! Some endpoints act on the organization selected in the session rather than
//! one given in the URL. To call them for an organization, the session is first
//! switched to it with `POST users/switch`, and the request is then sent with
//! the session token returned in the `sessionJwt` cookie.

use super::nomalab::NomalabClient;
use super::request::RequestOptions;
use crate::errors::{check, NomalabError};
use crate::models::SwitchOrganization;
use crate::types::{OrganizationIdRef, SessionToken, SESSION_COOKIE};

impl NomalabClient {
    /// Switch to `organization`, then send the request under the resulting session.
    ///
    /// The session stays locked from the switch until the dependent response is
    /// received, so concurrent calls never run under an identity they did not expect.
    pub(crate) async fn fetch_as(
        &self,
        organization: &OrganizationIdRef,
        path: &str,
        options: RequestOptions,
        message: impl Into<String>,
    ) -> Result<reqwest::Response, NomalabError> {
        let mut session = self.session.lock().await;

        let switch = RequestOptions::post().with_json(&SwitchOrganization { organization })?;
        let res = self.send(session.as_ref(), "users/switch", &switch).await?;
        let status = res.status();
        if !status.is_success() {
            return Err(NomalabError::Switch {
                organization: organization.to_owned(),
                status,
                reason: status.canonical_reason().unwrap_or("unknown reason"),
                text: res.text().await?,
            });
        }
        match session_cookie(&res) {
            Some(token) => {
                log::debug!("Switched session to organization {}", organization);
                self.store_session_cookie(&token)?;
                *session = Some(token);
            }
            None if self.strict_handshake => {
                return Err(NomalabError::NoSessionCookie(organization.to_owned()))
            }
            None => log::warn!(
                "Switching to organization {} did not set {}, keeping the current session",
                organization,
                SESSION_COOKIE
            ),
        }
        // body is not needed
        drop(res);

        let res = self.send(session.as_ref(), path, &options).await?;
        drop(session);
        check(res, message).await
    }
}

/// The session token set by a response, if any. When the cookie is set more
/// than once the last value wins, and an empty (cleared) value is no token.
fn session_cookie(res: &reqwest::Response) -> Option<SessionToken> {
    res.cookies()
        .filter(|cookie| cookie.name() == SESSION_COOKIE)
        .last()
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .map(SessionToken::from)
}
