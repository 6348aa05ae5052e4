use crate::types::*;
use serde::{Deserialize, Serialize};

use super::{Delivery, SegmentLabel, User};

/// A file stored by Nomalab: a media file, a proxy or a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub id: FileId,
    pub state: String,
    #[serde(default)]
    pub state_expire_at: Option<DateString>,
    pub created_at: DateString,
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub mime_type: Option<String>,
    pub bucket: Bucket,
    pub key: ObjectKey,
    pub kind: String,
    #[serde(default)]
    pub uploader_id: Option<UserId>,
    #[serde(default)]
    pub upload: Option<Upload>,
    #[serde(default)]
    pub uploaded_at: Option<DateString>,
    #[serde(default)]
    pub verification: Option<Verification>,
    #[serde(default)]
    pub source_id: Option<FileId>,
    #[serde(default)]
    pub transcoding: Option<Transcoding>,
    #[serde(default)]
    pub format: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    pub file: FileId,
    pub user: UserId,
    pub progress: f64,
    pub progressed_at: DateString,
    #[serde(default)]
    pub paused_at: Option<DateString>,
    #[serde(default)]
    pub completed_at: Option<DateString>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    pub s3_id: String,
    pub speed: f64,
    pub seconds_left: f64,
    pub source: String,
}

/// Result of the automated quality check of a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub progress: f64,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub result: Option<VerificationResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub nb_errors: u32,
    pub nb_warnings: u32,
    /// Per-stream report of the analyzer.
    #[serde(default)]
    pub report: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transcoding {
    pub file: FileId,
    pub phase: Phase,
    /// A number, a string or nothing depending on the phase.
    #[serde(default)]
    pub progress: Option<serde_json::Value>,
    pub started_at: DateString,
    pub progressed_at: DateString,
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub warning: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub file_id: FileId,
    pub format_name: String,
    pub format_long_name: String,
    pub duration: f64,
    pub bit_rate: f64,
    #[serde(default)]
    pub timecode: Option<Timecode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proxies {
    #[serde(default)]
    pub low_res: Option<FileInfo>,
    #[serde(default)]
    pub hi_res: Option<FileInfo>,
}

/// The files of a broadcastable: its material, an audio or a subtitle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastableFile {
    pub file: FileInfo,
    #[serde(default)]
    pub container: Option<Container>,
    /// Probed streams, as `[kind, stream]` pairs.
    #[serde(default)]
    pub streams: Vec<serde_json::Value>,
    #[serde(default)]
    pub proxies: Option<Proxies>,
    #[serde(default)]
    pub report_xml: Option<FileInfo>,
    #[serde(default)]
    pub report_pdf: Option<FileInfo>,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// A labelled range of frames in a file, e.g. opening credits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: SegmentId,
    pub label: SegmentLabel,
    pub creator: User,
    pub created_at: DateString,
    pub file: FileId,
    pub frame_in: u64,
    pub frame_out: u64,
}

impl Segment {
    /// Number of frames covered by this segment.
    pub fn frames(&self) -> u64 {
        self.frame_out.saturating_sub(self.frame_in)
    }
}
