mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, orphanage_row};
use donorlink::domain::VerificationStatus;
use donorlink::dto::{NewOrphanage, OrphanagePatch};
use donorlink::repository::{OrphanageCriteria, OrphanageRepository};
use serde_json::json;

/// Test that directory filters map to query parameters.
#[tokio::test]
async fn test_fetch_all_filters() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::rows(json!([orphanage_row(
        "o-1",
        "Hope House",
        "verified"
    )])))
    .await;
    let repository = OrphanageRepository::new(&client_for(&mock));

    let criteria = OrphanageCriteria {
        city: Some("Nairobi".to_string()),
        min_rating: Some(4.0),
        ..OrphanageCriteria::verified()
    };
    let orphanages = repository.fetch_all(&criteria).await.unwrap();

    assert_eq!(orphanages.len(), 1);
    assert!(orphanages[0].is_verified());
    let request = &mock.captured_requests().await[0];
    assert_eq!(request.path, "/rest/v1/orphanages");
    assert_eq!(
        request.query_param("verification_status").as_deref(),
        Some("eq.verified")
    );
    assert_eq!(request.query_param("city").as_deref(), Some("eq.Nairobi"));
    assert_eq!(request.query_param("rating").as_deref(), Some("gte.4"));
}

/// Test that a missing orphanage reports not found.
#[tokio::test]
async fn test_fetch_one_not_found() {
    let mock = MockBackend::start().await;
    let repository = OrphanageRepository::new(&client_for(&mock));

    let err = repository.fetch_one("ghost").await.unwrap_err();

    assert_eq!(err.message(), "Orphanage not found");
}

/// Test that duplicate rows resolve to the first.
#[tokio::test]
async fn test_fetch_one_takes_first_row() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::rows(json!([
        orphanage_row("o-1", "First", "pending"),
        orphanage_row("o-1", "Second", "pending"),
    ])))
    .await;
    let repository = OrphanageRepository::new(&client_for(&mock));

    let orphanage = repository.fetch_one("o-1").await.unwrap();

    assert_eq!(orphanage.name, "First");
}

/// Test the owner lookup used by orphanage accounts.
#[tokio::test]
async fn test_fetch_for_user() {
    let mock = MockBackend::start().await;
    let mut row = orphanage_row("o-1", "Hope House", "verified");
    row["user_id"] = json!("user-7");
    mock.enqueue_response(MockResponse::rows(json!([row]))).await;
    let repository = OrphanageRepository::new(&client_for(&mock));

    let orphanage = repository.fetch_for_user("user-7").await.unwrap();

    assert_eq!(orphanage.user_id.as_deref(), Some("user-7"));
    let request = &mock.captured_requests().await[0];
    assert_eq!(request.query_param("user_id").as_deref(), Some("eq.user-7"));
    assert_eq!(request.query_param("limit").as_deref(), Some("1"));
}

/// Test create re-queries by owner when one is given.
#[tokio::test]
async fn test_create_reloads_by_owner() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::created()).await;
    let mut row = orphanage_row("o-9", "Sunrise", "pending");
    row["user_id"] = json!("user-7");
    mock.enqueue_response(MockResponse::rows(json!([row]))).await;
    let repository = OrphanageRepository::new(&client_for(&mock));

    let mut orphanage = NewOrphanage::new("Sunrise", "1 Main St", "Nairobi");
    orphanage.user_id = Some("user-7".to_string());
    let created = repository.create(orphanage).await.unwrap();

    assert_eq!(created.id, "o-9");
    assert_eq!(created.verification_status, VerificationStatus::Pending);

    let requests = mock.captured_requests().await;
    let body = requests[0].json();
    assert!(body.as_object().unwrap().values().all(|v| !v.is_null()));
    assert_eq!(body["verification_status"], json!("pending"));
    assert!(body.get("contact_email").is_none());
    assert_eq!(requests[1].query_param("user_id").as_deref(), Some("eq.user-7"));
}

/// Test create re-queries by name without an owner.
#[tokio::test]
async fn test_create_reloads_by_name() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::created()).await;
    mock.enqueue_response(MockResponse::rows(json!([orphanage_row("o-9", "Sunrise", "pending")])))
        .await;
    let repository = OrphanageRepository::new(&client_for(&mock));

    repository
        .create(NewOrphanage::new("Sunrise", "1 Main St", "Nairobi"))
        .await
        .unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[1].query_param("name").as_deref(), Some("eq.Sunrise"));
    assert_eq!(requests[1].query_param("user_id"), None);
}

/// Test that only provided fields are patched.
#[tokio::test]
async fn test_update_sends_only_provided_fields() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::no_content()).await;
    let repository = OrphanageRepository::new(&client_for(&mock));

    let patch = OrphanagePatch {
        children_count: Some(42),
        ..OrphanagePatch::default()
    };
    repository.update("o-1", &patch).await.unwrap();

    let request = &mock.captured_requests().await[0];
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.json(), json!({ "children_count": 42 }));
}

/// Test that an empty orphanage patch is a no-op.
#[tokio::test]
async fn test_empty_update_makes_no_request() {
    let mock = MockBackend::start().await;
    let repository = OrphanageRepository::new(&client_for(&mock));

    repository.update("o-1", &OrphanagePatch::default()).await.unwrap();

    assert!(mock.captured_requests().await.is_empty());
}
