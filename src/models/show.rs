use crate::types::*;
use serde::{Deserialize, Serialize};

use super::{BroadcastableFile, Job, Organization, User};

/// The show record itself, as listed under a node or returned by actions on shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShowClass {
    pub id: ShowId,
    pub creator: UserId,
    pub created_at: DateString,
    #[serde(default)]
    pub updater: Option<UserId>,
    #[serde(default)]
    pub updated_at: Option<DateString>,
    pub title1: String,
    #[serde(default)]
    pub title2: Option<String>,
    pub organization: OrganizationId,
    pub accepted: bool,
    #[serde(rename = "commandInfoXML", default)]
    pub command_info_xml: Option<String>,
    pub kind: ShowKind,
    pub state: ArchiveState,
    #[serde(default)]
    pub parent: Option<NodeId>,
}

/// A show with everything attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub show: ShowClass,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub creator: Option<User>,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub channels: Vec<serde_json::Value>,
    #[serde(default)]
    pub invitations: Vec<serde_json::Value>,
    #[serde(default)]
    pub timeline: Vec<serde_json::Value>,
    #[serde(default)]
    pub extras: Vec<serde_json::Value>,
    #[serde(default)]
    pub active_broadcastable: Option<ActiveBroadcastable>,
    #[serde(default)]
    pub previous_broadcastables: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub show: ShowId,
    #[serde(default)]
    pub first_broadcasted_at: Option<DateString>,
    #[serde(default)]
    pub broadcaster_show_id: Option<String>,
    #[serde(default)]
    pub enable_auto_accept: bool,
    #[serde(default)]
    pub production_company_name: Option<String>,
    #[serde(default)]
    pub production_year: Option<u32>,
    #[serde(default)]
    pub program_type: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_format: Option<String>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub texted_video_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveBroadcastable {
    pub broadcastable: Broadcastable,
    pub files: BroadcastableFiles,
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
}

/// A deliverable media unit of a show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Broadcastable {
    pub id: BroadcastableId,
    pub show: ShowId,
    pub created_at: DateString,
    #[serde(default)]
    pub delivery_progress: Option<serde_json::Value>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub framerate: Option<serde_json::Value>,
    #[serde(default)]
    pub rejection: Option<serde_json::Value>,
    #[serde(default)]
    pub upload_log: Option<serde_json::Value>,
    #[serde(default)]
    pub generated_with_mapping: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastableFiles {
    #[serde(default)]
    pub material: Option<BroadcastableFile>,
    #[serde(default)]
    pub audios: Vec<BroadcastableFile>,
    #[serde(default)]
    pub subtitles: Vec<BroadcastableFile>,
}
