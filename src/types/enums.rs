use serde::{Deserialize, Serialize};

/// Whether a show is a master (received) or a delivery (sent) show.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShowKind {
    Delivery,
    Master,
}

/// Kind of a hierarchy node.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Season,
    Collection,
    Episode,
    Unitary,
}

/// Kind of an element in the path from the hierarchy root to a show.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PathElementKind {
    Delivery,
    Master,
    Collection,
    Unitary,
    Season,
    Episode,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveState {
    Active,
    Archived,
}

/// What a broadcastable carries.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BroadcastableKind {
    Subtitle,
    Material,
    Audio,
    Extra,
}

/// Progress of a transcoding.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    Waiting,
    Downloading,
    Encoding,
    Packaging,
    Uploading,
    Finished,
}

impl Phase {
    pub fn is_finished(self) -> bool {
        self == Phase::Finished
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum JobType {
    DownloadAsIs,
    #[serde(rename = "PADTranscode")]
    PadTranscode,
    #[serde(rename = "QC")]
    Qc,
    SimpleTranscode,
    Spotcheck,
}

/// Audio versions to include in a delivery.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VersionMapping {
    #[serde(rename = "VFVO")]
    Vfvo,
    #[serde(rename = "VF")]
    Vf,
    #[serde(rename = "VO")]
    Vo,
}
