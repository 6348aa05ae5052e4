//! Fixtures shared by the integration tests, which run against a [MockServer]
//! standing in for the page the client is embedded in.

#![allow(dead_code)]

use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;
use nomalab::{NomalabClient, NomalabClientBuilder};
use serde_json::{json, Value};
use wiremock::MockServer;

pub type AnyResult = Result<(), Box<dyn std::error::Error>>;

pub const TOKEN: &str = "initial-token";

/// A client builder for a relative API origin resolved against the mock server.
pub fn builder(server: &MockServer) -> NomalabClientBuilder {
    NomalabClient::builder().embedded_at(server.uri().parse().unwrap())
}

/// A client authenticated with [TOKEN].
pub fn client(server: &MockServer) -> NomalabClient {
    builder(server).token(TOKEN).build().unwrap()
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn organization(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "createdAt": "2022-11-03T09:12:44.512Z",
        "qcMasterTestPlan": "default",
        "qcMasterReportTemplate": "default",
        "destination": null,
        "downloadFileName": null,
        "enableCreationEmail": true,
        "enableVideoReadyEmail": true,
        "enableUploadSuccessEmail": false,
        "enableAutoAccept": false,
        "enableAutoReject": false,
        "broadcaster": null,
        "manualDelivery": false,
        "allowDeliveryWithoutTranscoding": true,
        "replication": false,
        "logo": null,
        "formats": [{"id": new_id(), "name": "PAD HD"}],
        "subtitleFormats": []
    })
}

/// Organizations with made up names.
pub fn some_organizations(count: usize) -> Vec<Value> {
    (0..count)
        .map(|_| {
            let name: String = CompanyName().fake();
            organization(&new_id(), &name)
        })
        .collect()
}

pub fn node(id: &str, organization: &str, name: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "creator": new_id(),
        "createdAt": "2023-01-10T15:00:00Z",
        "name": name,
        "organization": organization,
        "parent": null,
        "kind": kind,
        "state": "active"
    })
}

pub fn show_class(id: &str) -> Value {
    json!({
        "id": id,
        "creator": new_id(),
        "createdAt": "2023-01-10T15:00:00Z",
        "updater": null,
        "updatedAt": null,
        "title1": "Le Bureau des Légendes",
        "title2": null,
        "organization": new_id(),
        "accepted": true,
        "commandInfoXML": null,
        "kind": "Delivery",
        "state": "active",
        "parent": new_id()
    })
}

pub fn user(id: &str) -> Value {
    let name: String = Name().fake();
    json!({
        "id": id,
        "name": name,
        "email": "someone@example.org",
        "avatar": "",
        "organization": new_id(),
        "organizations": [],
        "isSetup": true,
        "admin": false,
        "disableOrganizationEmails": false
    })
}
