use actbills::{create_report, Error, GitHubApi, RepositoryId};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn repo() -> RepositoryId {
    RepositoryId {
        owner: "owner".to_string(),
        name: "repo".to_string(),
    }
}

async fn mock_workflows(
    server: &mut ServerGuard,
    page: u32,
    total_count: u64,
    workflows: serde_json::Value,
) -> mockito::Mock {
    server
        .mock("GET", "/repos/owner/repo/actions/workflows")
        .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "total_count": total_count, "workflows": workflows }).to_string())
        .create_async()
        .await
}

async fn mock_timing(
    server: &mut ServerGuard,
    id: u64,
    status: usize,
    body: serde_json::Value,
) -> mockito::Mock {
    server
        .mock("GET", format!("/repos/owner/repo/actions/workflows/{id}/timing").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn appends_report_for_all_workflows() {
    let mut server = Server::new_async().await;
    let _page1 = mock_workflows(
        &mut server,
        1,
        2,
        json!([
            { "id": 2, "name": "Workflow2", "state": "active" },
            { "id": 1, "name": "Workflow1", "state": "active" }
        ]),
    )
    .await;
    let _timing1 = mock_timing(
        &mut server,
        1,
        200,
        json!({ "billable": {
            "UBUNTU": { "total_ms": 7_200_000 },
            "WINDOWS": { "total_ms": 5_400_000 },
            "MACOS": { "total_ms": 3_600_000 }
        }}),
    )
    .await;
    let _timing2 = mock_timing(
        &mut server,
        2,
        200,
        json!({ "billable": {
            "UBUNTU": { "total_ms": 10_859_999 },
            "WINDOWS": { "total_ms": 1_800_000 },
            "UBUNTU_16_CORE": { "total_ms": 6_000_000 }
        }}),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("step_summary.md");
    std::fs::write(&output, "previous step\n").unwrap();

    let api = GitHubApi::new(Some(server.url().as_str()), None).unwrap();
    create_report(&api, &repo(), &output).await.unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written
        .starts_with("previous step\n# Billable time for workflows in this billable cycle\n"));
    assert!(written.contains(
        "| Workflow1 | 120 | 90 | 60 |
| Workflow2 | 180 | 30 | 0 |
| **Total** | **300** | **120** | **60** |
"
    ));
    assert!(written.ends_with("are not included in the aggregation.\n"));
}

#[tokio::test]
async fn rate_limited_workflow_writes_nothing() {
    let mut server = Server::new_async().await;
    let _page1 = mock_workflows(
        &mut server,
        1,
        2,
        json!([
            { "id": 1, "name": "Workflow1" },
            { "id": 2, "name": "Workflow2" }
        ]),
    )
    .await;
    let _timing1 = mock_timing(
        &mut server,
        1,
        200,
        json!({ "billable": { "UBUNTU": { "total_ms": 60_000 } } }),
    )
    .await;
    let _timing2 = mock_timing(
        &mut server,
        2,
        403,
        json!({
            "message": "API rate limit exceeded",
            "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"
        }),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("step_summary.md");

    let api = GitHubApi::new(Some(server.url().as_str()), Some("token".to_string())).unwrap();
    let result = create_report(&api, &repo(), &output).await;

    assert!(matches!(result, Err(Error::UpstreamApi { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn no_workflows_still_reports_total() {
    let mut server = Server::new_async().await;
    let _page1 = mock_workflows(&mut server, 1, 0, json!([])).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("step_summary.md");

    let api = GitHubApi::new(Some(server.url().as_str()), None).unwrap();
    create_report(&api, &repo(), &output).await.unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains(
        "| --- | --- | --- | --- |
| **Total** | **0** | **0** | **0** |
"
    ));
}
