//! Request bodies.

use crate::types::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Mapping, SubtitleFormatApi};

/// Body of `broadcastables/{id}/deliver`: deliver a broadcastable, transcoding it.
///
/// `None` fields are sent as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliverPayload {
    pub format: FormatId,
    pub version_mapping: VersionMapping,
    pub timecode_out: Option<Timecode>,
    pub timecode_in: Option<Timecode>,
    pub subtitles: Option<DeliverSubtitle>,
    pub target_org: OrganizationId,
    pub target_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliverSubtitle {
    pub format: Option<FormatId>,
    pub id: String,
    pub name: Option<String>,
}

/// Body of `aws/copy` and `aws/copyFromExt`: copy an S3 object into a broadcastable.
///
/// When `dest_role` is set the object lives in an external bucket, which
/// Nomalab accesses by assuming that role.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CopyToBroadcastable {
    pub kind: BroadcastableKind,
    pub broadcastable: BroadcastableId,
    pub key: ObjectKey,
    pub bucket: Bucket,
    #[serde(default)]
    pub dest_role: Option<String>,
}

impl CopyToBroadcastable {
    pub(crate) fn endpoint(&self) -> &'static str {
        if self.dest_role.is_some() {
            "aws/copyFromExt"
        } else {
            "aws/copy"
        }
    }
}

/// Body of `files/{id}/audioMapping`.
///
/// Only the mapping is typed, other settings are passed through as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioMappingPayload {
    pub mapping: Mapping,
    #[serde(flatten)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl AudioMappingPayload {
    pub fn new(mapping: Mapping) -> Self {
        Self {
            mapping,
            options: Default::default(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct SwitchOrganization<'a> {
    pub organization: &'a OrganizationIdRef,
}

#[skip_serializing_none]
#[derive(Serialize)]
pub(crate) struct CreateNode<'a> {
    pub name: &'a str,
    pub parent: Option<&'a NodeIdRef>,
    pub kind: NodeKind,
}

#[derive(Serialize)]
pub(crate) struct CreateShow<'a> {
    pub name: &'a str,
    pub kind: ShowKind,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShowIds<'a> {
    pub show_ids: [&'a ShowIdRef; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TargetOrganization<'a> {
    pub target_org: &'a OrganizationIdRef,
}

#[skip_serializing_none]
#[derive(Serialize)]
pub(crate) struct CopyToShow<'a> {
    pub target: &'a ShowIdRef,
    pub subtitles: Option<&'a SubtitleFormatApi>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_node_without_parent() {
        let body = CreateNode {
            name: "Season 1",
            parent: None,
            kind: NodeKind::Season,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"name": "Season 1", "kind": "Season"})
        );
    }

    #[test]
    fn test_deliver_payload_keeps_nulls() {
        let payload = DeliverPayload {
            format: FormatId::from_static("f1"),
            version_mapping: VersionMapping::Vfvo,
            timecode_out: None,
            timecode_in: Some(Timecode::from_static("10:00:00:00")),
            subtitles: None,
            target_org: OrganizationId::from_static("o2"),
            target_id: None,
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "format": "f1",
                "versionMapping": "VFVO",
                "timecodeOut": null,
                "timecodeIn": "10:00:00:00",
                "subtitles": null,
                "targetOrg": "o2",
                "targetId": null
            })
        );
    }

    #[test]
    fn test_copy_endpoint_depends_on_role() {
        let mut payload = CopyToBroadcastable {
            kind: BroadcastableKind::Material,
            broadcastable: BroadcastableId::from_static("b1"),
            key: ObjectKey::from_static("masters/film.mxf"),
            bucket: Bucket::from_static("ingest"),
            dest_role: None,
        };
        assert_eq!(payload.endpoint(), "aws/copy");
        assert!(serde_json::to_value(&payload)
            .unwrap()
            .get("destRole")
            .is_none());
        payload.dest_role = Some("arn:aws:iam::123:role/nomalab".to_string());
        assert_eq!(payload.endpoint(), "aws/copyFromExt");
    }

    #[test]
    fn test_audio_mapping_flattens_options() {
        let mut payload = AudioMappingPayload::new(Mapping::VdVo);
        payload.options.insert("streams".to_string(), json!([1, 2]));
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"mapping": "VDVO", "streams": [1, 2]})
        );
    }
}
