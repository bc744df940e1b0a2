//! API Integration Tests
//!
//! Every test drives a real axum server over HTTP. Servers are backed by the
//! in-memory store; the PostgreSQL flow at the bottom runs only when
//! DATABASE_URL is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_error, assert_json, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn add_team(server: &TestServer, team: &TeamFixture) -> TeamResponse {
    let response = server.post("/team/add", &team.request).await.unwrap();
    let envelope: TeamEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    envelope.team
}

async fn create_pr(server: &TestServer, pr_id: &str, author_id: &str) -> PrResponse {
    let response = server
        .post("/pullRequest/create", &CreatePrRequest::new(pr_id, author_id))
        .await
        .unwrap();
    let envelope: PrEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    envelope.pr
}

async fn merge_pr(server: &TestServer, pr_id: &str) -> PrResponse {
    let request = MergePrRequest {
        pull_request_id: pr_id.to_string(),
    };
    let response = server.post("/pullRequest/merge", &request).await.unwrap();
    let envelope: PrEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    envelope.pr
}

async fn reassign(server: &TestServer, pr_id: &str, old: &str) -> reqwest::Response {
    let request = ReassignRequest {
        pull_request_id: pr_id.to_string(),
        old_user_id: old.to_string(),
    };
    server.post("/pullRequest/reassign", &request).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], true);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Team Tests
// ============================================================================

#[tokio::test]
async fn test_add_and_get_team() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::new(&[("u1", true), ("u2", false)]);

    let created = add_team(&server, &team).await;
    assert_eq!(created.team_name, team.name());
    assert_eq!(created.members.len(), 2);
    assert_eq!(created.members[0].user_id, team.id("u1"));
    assert!(!created.members[1].is_active);

    let response = server
        .get(&format!("/team/get?team_name={}", team.name()))
        .await
        .unwrap();
    let fetched: TeamResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.team_name, team.name());
    assert_eq!(fetched.members[1].username, "User u2");
}

#[tokio::test]
async fn test_add_duplicate_team() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1"]);
    add_team(&server, &team).await;

    let response = server.post("/team/add", &team.request).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "TEAM_EXISTS");
}

#[tokio::test]
async fn test_duplicate_team_leaves_members_untouched() {
    let (server, context) = TestServer::start_in_memory().await.unwrap();
    let team = TeamFixture::active(&["u1", "u2"]);
    add_team(&server, &team).await;

    let overlapping = AddTeamRequest {
        team_name: team.name().to_string(),
        members: vec![
            MemberRequest {
                user_id: team.id("u1"),
                username: "Renamed".to_string(),
                is_active: false,
            },
            MemberRequest {
                user_id: team.id("new"),
                username: "User new".to_string(),
                is_active: true,
            },
        ],
    };
    let response = server.post("/team/add", &overlapping).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "TEAM_EXISTS");

    let response = server
        .get(&format!("/team/get?team_name={}", team.name()))
        .await
        .unwrap();
    let fetched: TeamResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let members: Vec<_> = fetched
        .members
        .iter()
        .map(|m| (m.user_id.clone(), m.username.as_str(), m.is_active))
        .collect();
    assert_eq!(
        members,
        [(team.id("u1"), "User u1", true), (team.id("u2"), "User u2", true)]
    );
    assert!(!context.user_repo().exists(&team.id("new")).await.unwrap());
}

#[tokio::test]
async fn test_get_team_errors() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/team/get").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MISSING_PARAMETER");

    let response = server.get("/team/get?team_name=ghost").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_body_and_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/team/add", "{\"team_name\":").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_REQUEST_BODY");

    let request = AddTeamRequest {
        team_name: String::new(),
        members: vec![],
    };
    let response = server.post("/team/add", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.is_some());
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_set_is_active() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1"]);
    add_team(&server, &team).await;

    let request = SetIsActiveRequest {
        user_id: team.id("u1"),
        is_active: false,
    };
    let response = server.post("/users/setIsActive", &request).await.unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.user.team_name, team.name());
    assert!(!envelope.user.is_active);

    let request = SetIsActiveRequest {
        user_id: "ghost".to_string(),
        is_active: true,
    };
    let response = server.post("/users/setIsActive", &request).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_reviews() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1", "u2"]);
    add_team(&server, &team).await;
    create_pr(&server, &team.id("pr1"), &team.id("u1")).await;

    let response = server
        .get(&format!("/users/getReview?user_id={}", team.id("u2")))
        .await
        .unwrap();
    let reviews: ReviewsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviews.user_id, team.id("u2"));
    assert_eq!(reviews.pull_requests.len(), 1);
    assert_eq!(reviews.pull_requests[0].pull_request_id, team.id("pr1"));
    assert_eq!(reviews.pull_requests[0].status, "OPEN");

    let response = server.get("/users/getReview").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MISSING_PARAMETER");
}

// ============================================================================
// Pull Request Tests
// ============================================================================

#[tokio::test]
async fn test_create_pr_assigns_two_reviewers() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1", "u2", "u3", "u4"]);
    add_team(&server, &team).await;

    let pr = create_pr(&server, &team.id("pr1"), &team.id("u1")).await;

    assert_eq!(pr.status, "OPEN");
    assert_eq!(pr.assigned_reviewers, [team.id("u2"), team.id("u3")]);
    assert!(pr.created_at.is_some());
    assert!(pr.merged_at.is_none());
}

#[tokio::test]
async fn test_create_pr_solo_author() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1"]);
    add_team(&server, &team).await;

    let pr = create_pr(&server, &team.id("pr1"), &team.id("u1")).await;
    assert!(pr.assigned_reviewers.is_empty());
}

#[tokio::test]
async fn test_create_pr_skips_inactive() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::new(&[("u1", true), ("u2", false), ("u3", true)]);
    add_team(&server, &team).await;

    let pr = create_pr(&server, &team.id("pr1"), &team.id("u1")).await;
    assert_eq!(pr.assigned_reviewers, [team.id("u3")]);
}

#[tokio::test]
async fn test_create_pr_errors() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1"]);
    add_team(&server, &team).await;
    create_pr(&server, &team.id("pr1"), &team.id("u1")).await;

    let response = server
        .post("/pullRequest/create", &CreatePrRequest::new(&team.id("pr1"), &team.id("u1")))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "PR_EXISTS");

    let response = server
        .post("/pullRequest/create", &CreatePrRequest::new(&team.id("pr2"), "ghost"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_merge_is_idempotent() {
    let (server, context) = TestServer::start_in_memory().await.unwrap();
    let team = TeamFixture::active(&["u1", "u2"]);
    let pr_id = team.id("pr1");
    add_team(&server, &team).await;
    create_pr(&server, &pr_id, &team.id("u1")).await;

    let first = merge_pr(&server, &pr_id).await;
    let stored = context.pull_request_repo().find_by_id(&pr_id).await.unwrap().unwrap();
    let second = merge_pr(&server, &pr_id).await;

    assert_eq!(first.status, "MERGED");
    assert!(first.merged_at.is_some());
    assert_eq!(first.merged_at, second.merged_at);
    assert_eq!(second.assigned_reviewers, [team.id("u2")]);

    let after = context.pull_request_repo().find_by_id(&pr_id).await.unwrap().unwrap();
    assert!(after.is_merged());
    assert_eq!(after.merged_at, stored.merged_at);
    assert_eq!(after.updated_at, stored.updated_at);

    let request = MergePrRequest {
        pull_request_id: "ghost".to_string(),
    };
    let response = server.post("/pullRequest/merge", &request).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

// ============================================================================
// Reassignment Tests
// ============================================================================

#[tokio::test]
async fn test_reassign_reviewer() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1", "u2", "u3", "u4"]);
    add_team(&server, &team).await;
    create_pr(&server, &team.id("pr1"), &team.id("u1")).await;

    let response = reassign(&server, &team.id("pr1"), &team.id("u2")).await;
    let body: ReassignResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.replaced_by, team.id("u4"));
    assert_eq!(body.pr.assigned_reviewers.len(), 2);
    assert!(body.pr.assigned_reviewers.contains(&team.id("u3")));
    assert!(body.pr.assigned_reviewers.contains(&team.id("u4")));
}

#[tokio::test]
async fn test_reassign_accepts_legacy_field_name() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1", "u2", "u3", "u4"]);
    add_team(&server, &team).await;
    create_pr(&server, &team.id("pr1"), &team.id("u1")).await;

    let request = serde_json::json!({
        "pull_request_id": team.id("pr1"),
        "old_reviewer_id": team.id("u3"),
    });
    let response = server.post("/pullRequest/reassign", &request).await.unwrap();
    let body: ReassignResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.replaced_by, team.id("u4"));
}

#[tokio::test]
async fn test_reassign_conflicts() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1", "u2", "u3"]);
    add_team(&server, &team).await;
    create_pr(&server, &team.id("pr1"), &team.id("u1")).await;

    let response = reassign(&server, &team.id("pr1"), &team.id("u2")).await;
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "NO_CANDIDATE");

    let response = reassign(&server, &team.id("pr1"), &team.id("u1")).await;
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "NOT_ASSIGNED");

    merge_pr(&server, &team.id("pr1")).await;
    let response = reassign(&server, &team.id("pr1"), &team.id("u2")).await;
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "PR_MERGED");

    let response = reassign(&server, "ghost", &team.id("u2")).await;
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_stats() {
    let server = TestServer::start().await.unwrap();
    let team = TeamFixture::active(&["u1", "u2", "u3"]);
    add_team(&server, &team).await;
    create_pr(&server, &team.id("pr1"), &team.id("u1")).await;
    create_pr(&server, &team.id("pr2"), &team.id("u2")).await;

    let response = server.get("/stats").await.unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.reviewer_stats.len(), 3);
    assert_eq!(stats.reviewer_stats[0].user_id, team.id("u3"));
    assert_eq!(stats.reviewer_stats[0].assigned_count, 2);

    let by_reviewer: i64 = stats.reviewer_stats.iter().map(|s| s.assigned_count).sum();
    let by_pr: i64 = stats.pr_stats.iter().map(|s| s.reviewer_count).sum();
    assert_eq!(by_reviewer, 4);
    assert_eq!(by_reviewer, by_pr);
}

#[tokio::test]
async fn test_stats_empty() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/stats").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["reviewer_stats"], serde_json::json!([]));
    assert_eq!(body["pr_stats"], serde_json::json!([]));
}

// ============================================================================
// PostgreSQL Flow
// ============================================================================

#[tokio::test]
async fn test_postgres_review_flow() {
    let Some(server) = TestServer::start_postgres().await.unwrap() else {
        return;
    };

    let response = server.get("/health/ready").await.unwrap();
    assert_json::<serde_json::Value>(response, StatusCode::OK)
        .await
        .unwrap();

    let team = TeamFixture::active(&["u1", "u2", "u3", "u4"]);
    add_team(&server, &team).await;

    let pr = create_pr(&server, &team.id("pr1"), &team.id("u1")).await;
    assert_eq!(pr.assigned_reviewers, [team.id("u2"), team.id("u3")]);

    let response = reassign(&server, &team.id("pr1"), &team.id("u2")).await;
    let body: ReassignResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.replaced_by, team.id("u4"));

    let first = merge_pr(&server, &team.id("pr1")).await;
    let second = merge_pr(&server, &team.id("pr1")).await;
    assert_eq!(first.merged_at, second.merged_at);

    let response = reassign(&server, &team.id("pr1"), &team.id("u3")).await;
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "PR_MERGED");
}
