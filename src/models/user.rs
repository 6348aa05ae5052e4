use crate::types::*;
use serde::{Deserialize, Serialize};

/// A Nomalab user, as returned by `users/me` or embedded as the creator of a resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Currently selected organization.
    #[serde(default)]
    pub organization: Option<OrganizationId>,
    #[serde(default)]
    pub organizations: Vec<OrganizationMembership>,
    #[serde(default)]
    pub is_setup: bool,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub disable_organization_emails: bool,
}

/// The logged in user.
pub type MeUser = User;

/// An organization a user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMembership {
    pub user_id: UserId,
    pub organization_id: OrganizationId,
    pub organization_name: String,
    #[serde(default)]
    pub logo: Option<String>,
}
