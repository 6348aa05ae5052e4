use crate::types::*;
use serde::{Deserialize, Serialize};

use super::{FormatRef, Show, Transcoding};

/// A delivery of a file to another organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: String,
    pub title: String,
    pub organization_name: String,
    pub transcoding: Transcoding,
}

/// Shows delivered to the current organization, with what is needed to
/// display them: their nodes and the formats of the receiving organizations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deliveries {
    #[serde(default)]
    pub shows: Vec<Show>,
    #[serde(default)]
    pub nodes: Vec<DeliveryNode>,
    #[serde(default)]
    pub formats: Vec<OrganizationFormats>,
    #[serde(default)]
    pub subtitle_formats: Vec<OrganizationSubtitleFormats>,
}

/// Deliveries of one organization, from `organizations/{id}/shows/deliveries`.
pub type DeliveryApi = Deliveries;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryNode {
    pub show_id: ShowId,
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationFormats {
    pub organization_id: OrganizationId,
    pub organization_name: String,
    #[serde(default)]
    pub organization_allow_delivery_without_transcoding: bool,
    pub formats: Vec<FormatRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSubtitleFormats {
    pub organization_id: OrganizationId,
    pub organization_name: String,
    pub subtitle_formats: Vec<FormatRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deliveries() {
        let deliveries: Deliveries = serde_json::from_value(serde_json::json!({
            "shows": [],
            "nodes": [{"showId": "s1", "id": "n1", "name": "Episode 1", "parent": null}],
            "formats": [{
                "organizationId": "o2",
                "organizationName": "Broadcaster",
                "organizationAllowDeliveryWithoutTranscoding": true,
                "formats": [{"id": "f1", "name": "PAD HD"}]
            }],
            "subtitleFormats": []
        }))
        .unwrap();
        assert!(deliveries.shows.is_empty());
        assert_eq!(deliveries.nodes[0].name, "Episode 1");
        assert!(deliveries.formats[0].organization_allow_delivery_without_transcoding);
        assert_eq!(deliveries.formats[0].formats[0].name, "PAD HD");
    }
}
