mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, need_row};
use donorlink::domain::{NeedPriority, NeedStatus};
use donorlink::dto::{NeedPatch, NewNeed};
use donorlink::repository::{NeedCriteria, NeedsRepository};
use serde_json::json;

/// Test that priority ordering ranks urgency instead of sorting text.
#[tokio::test]
async fn test_fetch_all_orders_by_priority_rank() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::rows(json!([
        need_row("n-1", "orph-1", "Rice", "low"),
        need_row("n-2", "orph-1", "Blankets", "urgent"),
        need_row("n-3", "orph-1", "Books", "high"),
    ])))
    .await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let needs = repository
        .fetch_all(&NeedCriteria::for_orphanage("orph-1").by_priority())
        .await
        .unwrap();

    let priorities: Vec<NeedPriority> = needs.iter().map(|n| n.priority).collect();
    assert_eq!(
        priorities,
        vec![NeedPriority::Urgent, NeedPriority::High, NeedPriority::Low]
    );

    let request = &mock.captured_requests().await[0];
    assert_eq!(request.path, "/rest/v1/needs");
    assert_eq!(request.query_param("orphanage_id").as_deref(), Some("eq.orph-1"));
    assert_eq!(request.query_param("order").as_deref(), Some("created_at.desc"));
}

/// Test that ties keep the backend's newest-first order.
#[tokio::test]
async fn test_priority_ties_keep_backend_order() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::rows(json!([
        need_row("newer", "orph-1", "Soap", "high"),
        need_row("older", "orph-1", "Towels", "high"),
        need_row("urgent", "orph-1", "Milk", "urgent"),
    ])))
    .await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let needs = repository.fetch_for_orphanage("orph-1").await.unwrap();

    let ids: Vec<&str> = needs.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["urgent", "newer", "older"]);
}

/// Test that a limit applies after ranking, so the most urgent need survives.
#[tokio::test]
async fn test_priority_limit_keeps_most_urgent() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::rows(json!([
        need_row("n-new", "orph-1", "Pencils", "low"),
        need_row("n-old", "orph-1", "Insulin", "urgent"),
    ])))
    .await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let criteria = NeedCriteria {
        limit: Some(1),
        ..NeedCriteria::for_orphanage("orph-1").by_priority()
    };
    let needs = repository.fetch_all(&criteria).await.unwrap();

    assert_eq!(needs.len(), 1);
    assert_eq!(needs[0].id, "n-old");
    assert_eq!(needs[0].priority, NeedPriority::Urgent);
    let request = &mock.captured_requests().await[0];
    assert_eq!(request.query_param("limit"), None);
}

/// Test that non-priority sorts are passed through to the backend.
#[tokio::test]
async fn test_other_sorts_are_sent_to_backend() {
    let mock = MockBackend::start().await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let criteria = NeedCriteria {
        status: Some(NeedStatus::Active),
        sort: donorlink::repository::Sort::by("item_name", donorlink::remote::SortDirection::Ascending),
        limit: Some(20),
        ..NeedCriteria::default()
    };
    repository.fetch_all(&criteria).await.unwrap();

    let request = &mock.captured_requests().await[0];
    assert_eq!(request.query_param("status").as_deref(), Some("eq.active"));
    assert_eq!(request.query_param("order").as_deref(), Some("item_name.asc"));
    assert_eq!(request.query_param("limit").as_deref(), Some("20"));
}

/// Test that rows missing optional columns get documented defaults.
#[tokio::test]
async fn test_sparse_rows_get_defaults() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::rows(json!([
        { "id": "n-1", "orphanage_id": "orph-1", "item_name": "Shoes" }
    ])))
    .await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let need = repository.fetch_one("n-1").await.unwrap();

    assert_eq!(need.quantity, 1);
    assert_eq!(need.quantity_fulfilled, 0);
    assert_eq!(need.priority, NeedPriority::Medium);
    assert_eq!(need.status, NeedStatus::Active);
    assert_eq!(need.description, None);
}

/// Test create body and the re-query used to return the new row.
#[tokio::test]
async fn test_create_need() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::created()).await;
    mock.enqueue_response(MockResponse::rows(json!([need_row(
        "n-7", "orph-1", "Winter coats", "urgent"
    )])))
    .await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let need = repository
        .create(NewNeed::new("orph-1", "Winter coats", 10, NeedPriority::Urgent))
        .await
        .unwrap();

    assert_eq!(need.id, "n-7");
    assert_eq!(need.item_name, "Winter coats");
    assert_eq!(need.priority, NeedPriority::Urgent);

    let requests = mock.captured_requests().await;
    let body = requests[0].json();
    assert_eq!(
        body,
        json!({
            "orphanage_id": "orph-1",
            "item_name": "Winter coats",
            "quantity": 10,
            "priority": "urgent",
            "status": "active"
        })
    );
    assert_eq!(requests[1].query_param("item_name").as_deref(), Some("eq.Winter coats"));
}

/// Test that an empty need patch is a no-op.
#[tokio::test]
async fn test_empty_update_makes_no_request() {
    let mock = MockBackend::start().await;
    let repository = NeedsRepository::new(&client_for(&mock));

    repository.update("n-1", &NeedPatch::default()).await.unwrap();

    assert!(mock.captured_requests().await.is_empty());
}

/// Test that mark_fulfilled writes only the status.
#[tokio::test]
async fn test_mark_fulfilled() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::no_content()).await;
    let repository = NeedsRepository::new(&client_for(&mock));

    repository.mark_fulfilled("n-1").await.unwrap();

    let patch = &mock.requests_with_method("PATCH").await[0];
    assert_eq!(patch.query_param("id").as_deref(), Some("eq.n-1"));
    assert_eq!(patch.json(), json!({ "status": "fulfilled" }));
}

/// Test that a contribution reaching the target flips the status.
#[tokio::test]
async fn test_record_contribution_completes_need() {
    let mock = MockBackend::start().await;
    let mut row = need_row("n-1", "orph-1", "Rice", "high");
    row["quantity_fulfilled"] = json!(7);
    mock.enqueue_response(MockResponse::rows(json!([row]))).await;
    mock.enqueue_response(MockResponse::no_content()).await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let need = repository.record_contribution("n-1", 5).await.unwrap();

    assert_eq!(need.quantity_fulfilled, 10);
    assert_eq!(need.status, NeedStatus::Fulfilled);
    let patch = &mock.requests_with_method("PATCH").await[0];
    assert_eq!(
        patch.json(),
        json!({ "quantity_fulfilled": 10, "status": "fulfilled" })
    );
}

/// Test that a partial contribution leaves the need active.
#[tokio::test]
async fn test_record_partial_contribution() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::rows(json!([need_row("n-1", "orph-1", "Rice", "high")])))
        .await;
    mock.enqueue_response(MockResponse::no_content()).await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let need = repository.record_contribution("n-1", 3).await.unwrap();

    assert_eq!(need.quantity_fulfilled, 3);
    assert_eq!(need.status, NeedStatus::Active);
    let patch = &mock.requests_with_method("PATCH").await[0];
    assert_eq!(patch.json(), json!({ "quantity_fulfilled": 3 }));
}

/// Test that a contribution near the integer limit is clamped instead of overflowing.
#[tokio::test]
async fn test_record_contribution_saturates() {
    let mock = MockBackend::start().await;
    let mut row = need_row("n-1", "orph-1", "Rice", "high");
    row["quantity"] = json!(i32::MAX);
    row["quantity_fulfilled"] = json!(i32::MAX - 5);
    mock.enqueue_response(MockResponse::rows(json!([row]))).await;
    mock.enqueue_response(MockResponse::no_content()).await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let need = repository.record_contribution("n-1", 10).await.unwrap();

    assert_eq!(need.quantity_fulfilled, i32::MAX);
    assert_eq!(need.status, NeedStatus::Fulfilled);
    let patch = &mock.requests_with_method("PATCH").await[0];
    assert_eq!(
        patch.json(),
        json!({ "quantity_fulfilled": i32::MAX, "status": "fulfilled" })
    );
}

/// Test that non-positive contributions are rejected locally.
#[tokio::test]
async fn test_record_contribution_rejects_zero() {
    let mock = MockBackend::start().await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let err = repository.record_contribution("n-1", 0).await.unwrap_err();

    assert_eq!(err.message(), "Quantity must be greater than zero");
    assert!(mock.captured_requests().await.is_empty());
}

/// Test that need deletion is unconditional.
#[tokio::test]
async fn test_delete_need() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::no_content()).await;
    let repository = NeedsRepository::new(&client_for(&mock));

    repository.delete("n-1").await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].query_param("id").as_deref(), Some("eq.n-1"));
}

/// Test categories come back sorted by name.
#[tokio::test]
async fn test_fetch_categories() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::rows(json!([
        { "id": "c-1", "name": "Clothing", "icon": "shirt" },
        { "id": "c-2", "name": "Food" }
    ])))
    .await;
    let repository = NeedsRepository::new(&client_for(&mock));

    let categories = repository.fetch_categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].icon.as_deref(), Some("shirt"));
    assert_eq!(categories[1].description, None);
    let request = &mock.captured_requests().await[0];
    assert_eq!(request.path, "/rest/v1/categories");
    assert_eq!(request.query_param("order").as_deref(), Some("name.asc"));
}
