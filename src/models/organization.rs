use crate::types::*;
use serde::{Deserialize, Serialize};

/// An organization. Shows embed a smaller variant of the same record,
/// hence most fields default when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateString>,
    #[serde(default)]
    pub qc_master_test_plan: Option<String>,
    #[serde(default)]
    pub qc_master_report_template: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub download_file_name: Option<String>,
    #[serde(default)]
    pub enable_creation_email: bool,
    #[serde(default)]
    pub enable_video_ready_email: bool,
    #[serde(default)]
    pub enable_upload_success_email: bool,
    #[serde(default)]
    pub enable_auto_accept: bool,
    #[serde(default)]
    pub enable_auto_reject: bool,
    #[serde(default)]
    pub broadcaster: Option<String>,
    #[serde(default)]
    pub manual_delivery: bool,
    #[serde(default)]
    pub allow_delivery_without_transcoding: bool,
    #[serde(default)]
    pub replication: bool,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
    #[serde(default)]
    pub formats: Vec<FormatRef>,
    #[serde(default)]
    pub subtitle_formats: Vec<FormatRef>,
}

/// Name and ID of a (subtitle) format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatRef {
    pub id: FormatId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Webhook {
    pub id: String,
    pub organization: OrganizationId,
    pub event: String,
    pub activated: bool,
    pub params: WebhookParams,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookParams {
    pub kind: String,
    pub url: String,
    pub format: String,
}

/// An organization the current one can deliver to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableOrganization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub allow_delivery_without_transcoding: bool,
}
