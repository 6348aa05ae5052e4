use aliri_braid::braid;

/// Nomalab user ID
#[braid(serde)]
pub struct UserId;

/// Organization ID
#[braid(serde)]
pub struct OrganizationId;

/// Show ID
#[braid(serde)]
pub struct ShowId;

/// Hierarchy node ID
#[braid(serde)]
pub struct NodeId;

/// Broadcastable ID
#[braid(serde)]
pub struct BroadcastableId;

/// File ID. Proxies, materials and subtitles are all files.
#[braid(serde)]
pub struct FileId;

/// Job ID
#[braid(serde)]
pub struct JobId;

/// Delivery format ID
#[braid(serde)]
pub struct FormatId;

/// Segment ID
#[braid(serde)]
pub struct SegmentId;
