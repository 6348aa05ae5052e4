use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub created_at: DateString,
    #[serde(default)]
    pub started_at: Option<DateString>,
    #[serde(default)]
    pub completed_at: Option<DateString>,
    pub show: ShowId,
    pub organization: OrganizationId,
    pub requester: UserId,
    pub job_type: JobType,
    #[serde(default)]
    pub external_job_id: Option<String>,
    #[serde(default)]
    pub format: Option<FormatId>,
    #[serde(default)]
    pub started_by: Option<UserId>,
    #[serde(default)]
    pub completed_by: Option<UserId>,
    pub acknowledge: bool,
    #[serde(default)]
    pub acknowledged_by: Option<UserId>,
}

impl Job {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
