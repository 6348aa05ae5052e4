use super::builder::{AuthMode, NomalabClientBuilder};
use super::request::{json, RequestOptions};
use crate::errors::{GetError, NomalabError};
use crate::models::*;
use crate::types::*;
use bytes::Bytes;
use reqwest::cookie::Jar;
use reqwest_middleware::ClientWithMiddleware;
use std::sync::Arc;
use tokio::sync::Mutex;
use url::Url;

/// Nomalab API client.
///
/// The client owns the session: the token given to the builder may be replaced
/// when an organization-scoped method switches organization. Share the client
/// (e.g. in an [std::sync::Arc]) rather than cloning tokens around.
#[derive(Debug)]
pub struct NomalabClient {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) origin: String,
    pub(crate) base: Option<Url>,
    pub(crate) auth_mode: AuthMode,
    pub(crate) strict_handshake: bool,
    pub(crate) session: Mutex<Option<SessionToken>>,
    /// Cookie store of embed mode, which then carries the session cookie.
    pub(crate) cookies: Option<Arc<Jar>>,
    context: Option<Context>,
}

impl NomalabClient {
    /// Create a client builder.
    pub fn builder() -> NomalabClientBuilder {
        NomalabClientBuilder::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        client: ClientWithMiddleware,
        origin: String,
        base: Option<Url>,
        context: Option<Context>,
        token: Option<SessionToken>,
        auth_mode: AuthMode,
        strict_handshake: bool,
        cookies: Option<Arc<Jar>>,
    ) -> Self {
        Self {
            client,
            origin,
            base,
            auth_mode,
            strict_handshake,
            session: Mutex::new(token),
            cookies,
            context,
        }
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// API origin, empty when relative.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The token currently used to authenticate.
    pub async fn session_token(&self) -> Option<SessionToken> {
        self.session.lock().await.clone()
    }

    // ==================================================
    //                 USERS
    // ==================================================

    /// Get the logged in user.
    pub async fn me(&self) -> Result<MeUser, NomalabError> {
        self.fetch_json("users/me", RequestOptions::get(), "Can't get current user")
            .await
    }

    // ==================================================
    //                 SHOWS
    // ==================================================

    pub async fn get_show(&self, id: &ShowIdRef) -> Result<Show, NomalabError> {
        self.fetch_json(
            &format!("shows/{}", id),
            RequestOptions::get(),
            format!("Can't find show with id {}", id),
        )
        .await
    }

    /// Create a show under a hierarchy node, returning its ID.
    pub async fn create_show(
        &self,
        node: &NodeIdRef,
        name: &str,
        kind: ShowKind,
    ) -> Result<ShowId, NomalabError> {
        let options = RequestOptions::post().with_json(&CreateShow { name, kind })?;
        let show: ShowClass = self
            .fetch_json(
                &format!("hierarchy/{}/shows", node),
                options,
                format!("Can't create show {} under node {}", name, node),
            )
            .await?;
        Ok(show.id)
    }

    /// Get the path from the hierarchy root to a show.
    pub async fn get_path(&self, show: &ShowIdRef) -> Result<Vec<ShowPath>, NomalabError> {
        let options = RequestOptions::post().with_json(&ShowIds { show_ids: [show] })?;
        self.fetch_json(
            "admin/shows/path",
            options,
            format!("Can't get path of show {}", show),
        )
        .await
    }

    pub async fn accept(&self, show: &ShowIdRef) -> Result<ShowClass, NomalabError> {
        self.fetch_json(
            &format!("shows/{}/accept", show),
            RequestOptions::post(),
            format!("Can't accept show {}", show),
        )
        .await
    }

    // ==================================================
    //                 HIERARCHY
    // ==================================================

    /// Get the root nodes of an organization.
    pub async fn get_roots(
        &self,
        organization: &OrganizationIdRef,
    ) -> Result<Vec<NodeClass>, NomalabError> {
        let res = self
            .fetch_as(
                organization,
                "hierarchy",
                RequestOptions::get(),
                format!("Can't get roots of organization {}", organization),
            )
            .await?;
        json(res).await
    }

    /// Create a hierarchy node in an organization. Without `parent` the node is a root.
    pub async fn create_hierarchy(
        &self,
        organization: &OrganizationIdRef,
        name: &str,
        kind: NodeKind,
        parent: Option<&NodeIdRef>,
    ) -> Result<NodeClass, NomalabError> {
        let options = RequestOptions::post().with_json(&CreateNode { name, parent, kind })?;
        let res = self
            .fetch_as(
                organization,
                "hierarchy",
                options,
                format!(
                    "Can't create node {} in organization {}",
                    name, organization
                ),
            )
            .await?;
        json(res).await
    }

    pub async fn get_node(&self, node: &NodeIdRef) -> Result<Node, NomalabError> {
        self.fetch_json(
            &format!("hierarchy/{}", node),
            RequestOptions::get(),
            format!("Can't find node with id {}", node),
        )
        .await
    }

    pub async fn get_children(&self, node: &NodeIdRef) -> Result<Vec<NodeClass>, NomalabError> {
        self.fetch_json(
            &format!("hierarchy/{}/children", node),
            RequestOptions::get(),
            format!("Can't get children of node {}", node),
        )
        .await
    }

    pub async fn get_shows_for_node(
        &self,
        node: &NodeIdRef,
    ) -> Result<Vec<ShowClass>, NomalabError> {
        self.fetch_json(
            &format!("hierarchy/{}/shows", node),
            RequestOptions::get(),
            format!("Can't get shows of node {}", node),
        )
        .await
    }

    // ==================================================
    //                 ORGANIZATIONS
    // ==================================================

    pub async fn get_organizations(&self) -> Result<Vec<Organization>, NomalabError> {
        self.fetch_json(
            "organizations",
            RequestOptions::get(),
            "Can't get organizations",
        )
        .await
    }

    /// Get an organization by ID.
    pub async fn get_organization(
        &self,
        id: &OrganizationIdRef,
    ) -> Result<Organization, GetError> {
        self.find_organization(|org| org.id.as_str() == id.as_str(), id.as_str())
            .await
    }

    /// Get an organization by name.
    pub async fn get_organization_by_name(&self, name: &str) -> Result<Organization, GetError> {
        self.find_organization(|org| org.name == name, name).await
    }

    async fn find_organization(
        &self,
        predicate: impl Fn(&Organization) -> bool,
        key: &str,
    ) -> Result<Organization, GetError> {
        self.get_organizations()
            .await?
            .into_iter()
            .find(predicate)
            .ok_or_else(|| GetError::NotFound(format!("Org {}", key)))
    }

    /// Organizations the current organization can deliver to.
    pub async fn get_deliverable_orgs(
        &self,
    ) -> Result<Vec<DeliverableOrganization>, NomalabError> {
        self.fetch_json(
            "organizations/deliverables",
            RequestOptions::get(),
            "Can't get deliverable organizations",
        )
        .await
    }

    pub async fn get_organization_deliveries(
        &self,
        organization: &OrganizationIdRef,
    ) -> Result<DeliveryApi, NomalabError> {
        self.fetch_json(
            &format!("organizations/{}/shows/deliveries", organization),
            RequestOptions::get(),
            format!("Can't get deliveries of organization {}", organization),
        )
        .await
    }

    pub async fn get_formats(
        &self,
        organization: &OrganizationIdRef,
    ) -> Result<Vec<Format>, NomalabError> {
        self.fetch_json(
            &format!("organizations/{}/formats", organization),
            RequestOptions::get(),
            format!("Can't get formats of organization {}", organization),
        )
        .await
    }

    pub async fn get_subtitle_formats(
        &self,
        organization: &OrganizationIdRef,
    ) -> Result<Vec<SubtitleFormatApi>, NomalabError> {
        self.fetch_json(
            &format!("organizations/{}/subtitleFormats", organization),
            RequestOptions::get(),
            format!("Can't get subtitle formats of organization {}", organization),
        )
        .await
    }

    /// All subtitle formats.
    pub async fn get_subtitle_formats_list(&self) -> Result<SubtitleFormats, NomalabError> {
        self.fetch_json(
            "subtitleFormats",
            RequestOptions::get(),
            "Can't get subtitle formats",
        )
        .await
    }

    // ==================================================
    //                 DELIVERIES
    // ==================================================

    /// Shows delivered to the current organization.
    ///
    /// Fails with [NomalabError::AlreadyPresentDeliverable] on conflict.
    pub async fn get_deliveries(&self) -> Result<Deliveries, NomalabError> {
        self.fetch_json(
            "shows/deliveries",
            RequestOptions::get(),
            "Can't get deliveries",
        )
        .await
    }

    /// Deliver a broadcastable, transcoding it to the format of the payload.
    ///
    /// Fails with [NomalabError::AlreadyPresentDeliverable] if it was already delivered.
    pub async fn deliver(
        &self,
        broadcastable: &BroadcastableIdRef,
        payload: &DeliverPayload,
    ) -> Result<Option<serde_json::Value>, NomalabError> {
        self.fetch_json(
            &format!("broadcastables/{}/deliver", broadcastable),
            RequestOptions::post().with_json(payload)?,
            format!("Can't deliver broadcastable {}", broadcastable),
        )
        .await
    }

    /// Start uploading a delivered broadcastable to its destination.
    ///
    /// Fails with [NomalabError::AlreadyPresentDeliverable] if it was already delivered.
    pub async fn trigger_upload(
        &self,
        broadcastable: &BroadcastableIdRef,
    ) -> Result<(), NomalabError> {
        self.fetch(
            &format!("broadcastables/{}/delivery", broadcastable),
            RequestOptions::post().with_json(&serde_json::json!({}))?,
            format!("Can't trigger upload of broadcastable {}", broadcastable),
        )
        .await?;
        Ok(())
    }

    /// Accept a show, then upload its broadcastable.
    pub async fn accept_and_deliver(
        &self,
        broadcastable: &BroadcastableIdRef,
        show: &ShowIdRef,
    ) -> Result<(), NomalabError> {
        self.accept(show).await?;
        self.trigger_upload(broadcastable).await
    }

    /// Copy a broadcastable to another organization as is.
    ///
    /// Fails with [NomalabError::AlreadyPresentDeliverable] if it was already delivered.
    pub async fn deliver_without_transcoding(
        &self,
        broadcastable: &BroadcastableIdRef,
        target: &OrganizationIdRef,
    ) -> Result<ShowClass, NomalabError> {
        self.fetch_json(
            &format!("broadcastables/{}/copyToOrganization", broadcastable),
            RequestOptions::post().with_json(&TargetOrganization { target_org: target })?,
            format!(
                "Can't deliver broadcastable {} to organization {}",
                broadcastable, target
            ),
        )
        .await
    }

    /// Copy a broadcastable into another show, optionally converting its subtitles.
    pub async fn copy_to_show(
        &self,
        broadcastable: &BroadcastableIdRef,
        target: &ShowIdRef,
        subtitles: Option<&SubtitleFormatApi>,
    ) -> Result<ShowClass, NomalabError> {
        self.fetch_json(
            &format!("broadcastables/{}/copyToShow", broadcastable),
            RequestOptions::post().with_json(&CopyToShow { target, subtitles })?,
            format!(
                "Can't copy broadcastable {} to show {}",
                broadcastable, target
            ),
        )
        .await
    }

    /// Copy an S3 object into a broadcastable.
    pub async fn s3_upload(&self, payload: &CopyToBroadcastable) -> Result<(), NomalabError> {
        self.fetch(
            payload.endpoint(),
            RequestOptions::post().with_json(payload)?,
            format!(
                "Can't copy {} into broadcastable {}",
                payload.key, payload.broadcastable
            ),
        )
        .await?;
        Ok(())
    }

    // ==================================================
    //                 JOBS AND FILES
    // ==================================================

    pub async fn get_job(&self, id: &JobIdRef) -> Result<Job, NomalabError> {
        self.fetch_json(
            &format!("jobs/{}", id),
            RequestOptions::get(),
            format!("Can't find job with id {}", id),
        )
        .await
    }

    pub async fn get_segments(&self, file: &FileIdRef) -> Result<Vec<Segment>, NomalabError> {
        self.fetch_json(
            &format!("files/{}/segments", file),
            RequestOptions::get(),
            format!("Can't get segments of file {}", file),
        )
        .await
    }

    /// Segments of the material file of a broadcastable.
    pub async fn get_file_segments(
        &self,
        material: &FileIdRef,
    ) -> Result<Vec<Segment>, NomalabError> {
        self.get_segments(material).await
    }

    /// Get the DASH manifest of a proxy, as is.
    pub async fn get_manifest(&self, proxy: &FileIdRef) -> Result<Bytes, NomalabError> {
        let res = self
            .fetch(
                &format!("files/{}/manifest", proxy),
                RequestOptions::get().with_content_type("application/xml"),
                format!("Can't get manifest of proxy {}", proxy),
            )
            .await?;
        Ok(res.bytes().await?)
    }

    pub async fn set_audio_mapping(
        &self,
        file: &FileIdRef,
        payload: &AudioMappingPayload,
    ) -> Result<Option<serde_json::Value>, NomalabError> {
        self.fetch_json(
            &format!("files/{}/audioMapping", file),
            RequestOptions::post().with_json(payload)?,
            format!("Can't set audio mapping of file {}", file),
        )
        .await
    }

    // ==================================================
    //                 RAW ACCESS
    // ==================================================

    /// Send any request to the API as the current session.
    ///
    /// The response is returned as is when successful, so that endpoints this
    /// client does not know about can still be used.
    pub async fn proxy(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Response, NomalabError> {
        self.fetch(path, options, format!("Request to {} failed", path))
            .await
    }
}
