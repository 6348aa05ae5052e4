use crate::types::*;
use serde::{Deserialize, Serialize};

/// A hierarchy node: season, collection, episode or unitary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeClass {
    pub id: NodeId,
    pub creator: UserId,
    pub created_at: DateString,
    pub name: String,
    pub organization: OrganizationId,
    /// `None` for roots.
    #[serde(default)]
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    pub state: String,
}

/// A hierarchy node with its event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub node: NodeClass,
    /// Pairs of event category and event.
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
}

/// Path from a hierarchy root down to a show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShowPath {
    pub show_id: ShowId,
    pub path: Vec<PathElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    pub value: String,
    #[serde(default)]
    pub node_id: Option<NodeId>,
    pub kind: PathElementKind,
    #[serde(default)]
    pub show_id: Option<ShowId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node_has_no_parent() {
        let node: NodeClass = serde_json::from_value(serde_json::json!({
            "id": "n1",
            "creator": "u1",
            "createdAt": "2023-03-01T10:00:00Z",
            "name": "Season 1",
            "organization": "o1",
            "parent": null,
            "kind": "Season",
            "state": "active"
        }))
        .unwrap();
        assert!(node.parent.is_none());
        assert_eq!(node.kind, NodeKind::Season);
    }

    #[test]
    fn test_show_path() {
        let paths: Vec<ShowPath> = serde_json::from_value(serde_json::json!([{
            "showId": "s1",
            "path": [
                {"value": "My collection", "nodeId": "n1", "kind": "Collection"},
                {"value": "My show", "showId": "s1", "kind": "Master"}
            ]
        }]))
        .unwrap();
        let path = &paths[0].path;
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].node_id.as_ref().unwrap().as_str(), "n1");
        assert_eq!(path[1].kind, PathElementKind::Master);
    }
}
