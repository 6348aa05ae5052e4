mod helpers;

use helpers::{client, new_id, AnyResult};
use nomalab::models::*;
use nomalab::types::*;
use rstest::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[rstest]
#[tokio::test]
async fn test_get_node_and_children() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/hierarchy/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "node": helpers::node("n1", "o1", "Series", "Collection"),
            "events": [["node", {"kind": "created"}]]
        })))
        .mount(&server)
        .await;
    let mut child = helpers::node("n2", "o1", "Season 1", "Season");
    child["parent"] = json!("n1");
    Mock::given(method("GET"))
        .and(path("/v3/hierarchy/n1/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([child])))
        .mount(&server)
        .await;

    let client = client(&server);
    let node = client.get_node(NodeIdRef::from_static("n1")).await?;
    assert_eq!(node.node.name, "Series");
    assert_eq!(node.events.len(), 1);

    let children = client.get_children(NodeIdRef::from_static("n1")).await?;
    assert_eq!(children[0].parent.as_deref(), Some(NodeIdRef::from_static("n1")));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_get_shows_for_node() -> AnyResult {
    let server = MockServer::start().await;
    let ids = [new_id(), new_id()];
    Mock::given(method("GET"))
        .and(path("/v3/hierarchy/n1/shows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::show_class(&ids[0]),
            helpers::show_class(&ids[1])
        ])))
        .mount(&server)
        .await;
    let shows = client(&server)
        .get_shows_for_node(NodeIdRef::from_static("n1"))
        .await?;
    let found: Vec<&str> = shows.iter().map(|show| show.id.as_str()).collect();
    assert_eq!(found, [ids[0].as_str(), ids[1].as_str()]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_get_job() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/v3/jobs/j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "j1",
            "createdAt": "2024-02-01T08:00:00Z",
            "startedAt": "2024-02-01T08:01:00Z",
            "completedAt": null,
            "show": "s1",
            "organization": "o1",
            "requester": "u1",
            "jobType": "PADTranscode",
            "acknowledge": false
        })))
        .mount(&server)
        .await;
    let job = client(&server).get_job(JobIdRef::from_static("j1")).await?;
    assert_eq!(job.job_type, JobType::PadTranscode);
    assert!(!job.is_completed());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_get_file_segments() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/v3/files/m1/segments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "sg1",
            "label": "OpeningCredits",
            "creator": helpers::user("u1"),
            "createdAt": "2024-02-01T08:00:00Z",
            "file": "m1",
            "frameIn": 0,
            "frameOut": 1500
        }])))
        .expect(1)
        .mount(&server)
        .await;
    let segments = client(&server)
        .get_file_segments(FileIdRef::from_static("m1"))
        .await?;
    assert_eq!(segments[0].label, SegmentLabel::OpeningCredits);
    assert_eq!(segments[0].frames(), 1500);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_get_organization_deliveries() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/v3/organizations/o1/shows/deliveries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nodes": [{"showId": "s1", "id": "n1", "name": "Episode 1"}]
        })))
        .mount(&server)
        .await;
    let deliveries = client(&server)
        .get_organization_deliveries(OrganizationIdRef::from_static("o1"))
        .await?;
    assert!(deliveries.shows.is_empty());
    assert_eq!(deliveries.nodes[0].show_id.as_str(), "s1");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_get_subtitle_formats_list() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/v3/subtitleFormats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "sf1",
            "name": "Teletext FR",
            "fileFormat": "STL",
            "displayStandard": "Teletext1",
            "subtitleFrameRate": {"id": "25", "numerator": 25, "denominator": 1}
        }])))
        .mount(&server)
        .await;
    let formats = client(&server).get_subtitle_formats_list().await?;
    assert_eq!(formats[0].file_format, SubtitleFileFormat::Stl);
    assert_eq!(
        formats[0].display_standard,
        Some(SubtitleDisplayStandard::Teletext1)
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_copy_to_show_with_subtitles() -> AnyResult {
    let server = MockServer::start().await;
    let subtitles: SubtitleFormatApi = serde_json::from_value(json!({
        "id": "sf1",
        "name": "SRT",
        "fileFormat": "SRT"
    }))?;
    Mock::given(method("POST"))
        .and(path("/v3/broadcastables/b1/copyToShow"))
        .and(wiremock::matchers::body_json(json!({
            "target": "s2",
            "subtitles": {"id": "sf1", "name": "SRT", "fileFormat": "SRT"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::show_class("s2")))
        .expect(1)
        .mount(&server)
        .await;
    let show = client(&server)
        .copy_to_show(
            BroadcastableIdRef::from_static("b1"),
            ShowIdRef::from_static("s2"),
            Some(&subtitles),
        )
        .await?;
    assert_eq!(show.id.as_str(), "s2");
    Ok(())
}
