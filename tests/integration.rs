// tests/integration.rs
// End-to-end tests driving the tool layer against an in-memory database


use helpdesk::tools;
use serde_json::{json, Map, Value};
use test_utils::TestContext;

fn fields(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// get_customer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_customer_returns_record() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Alice Johnson", "active").await;

    let out = tools::get_customer(&ctx, id).await.unwrap().0;
    let customer = out.customer.expect("customer should be present");
    assert_eq!(customer.id, id);
    assert_eq!(customer.name, "Alice Johnson");
    assert_eq!(customer.status, "active");
    assert!(!customer.created_at.is_empty());
}

#[tokio::test]
async fn get_customer_unknown_id_is_absent_not_error() {
    let ctx = TestContext::new().await;

    let out = tools::get_customer(&ctx, 9999).await.unwrap().0;
    assert!(out.customer.is_none());
    assert!(out.message.contains("9999"));
}

#[tokio::test]
async fn get_customer_is_idempotent() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Bob Smith", "active").await;

    let first = tools::get_customer(&ctx, id).await.unwrap().0;
    let second = tools::get_customer(&ctx, id).await.unwrap().0;
    let (a, b) = (first.customer.unwrap(), second.customer.unwrap());
    assert_eq!(a.name, b.name);
    assert_eq!(a.updated_at, b.updated_at);
}

// ---------------------------------------------------------------------------
// list_customers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_customers_is_idempotent() {
    let ctx = TestContext::new().await;
    ctx.seed_customer("Nathan Kim", "active").await;
    ctx.seed_customer("Olivia Taylor", "active").await;
    ctx.seed_customer("Leo Garcia", "disabled").await;

    let first = tools::list_customers(&ctx, Some("active".to_string()), Some(10))
        .await
        .unwrap()
        .0;
    let second = tools::list_customers(&ctx, Some("active".to_string()), Some(10))
        .await
        .unwrap()
        .0;

    assert_eq!(first.total, second.total);
    let ids = |out: &helpdesk::mcp::responses::CustomerListOutput| {
        out.customers.iter().map(|c| c.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    let stamps = |out: &helpdesk::mcp::responses::CustomerListOutput| {
        out.customers.iter().map(|c| c.updated_at.clone()).collect::<Vec<_>>()
    };
    assert_eq!(stamps(&first), stamps(&second));
}

#[tokio::test]
async fn list_customers_defaults_to_active() {
    let ctx = TestContext::new().await;
    ctx.seed_customer("Active One", "active").await;
    ctx.seed_customer("Disabled One", "disabled").await;
    ctx.seed_customer("Active Two", "active").await;

    let out = tools::list_customers(&ctx, None, None).await.unwrap().0;
    assert_eq!(out.total, 2);
    assert!(out.customers.iter().all(|c| c.status == "active"));
}

#[tokio::test]
async fn list_customers_respects_status_and_limit() {
    let ctx = TestContext::new().await;
    let mut disabled_ids = Vec::new();
    for i in 0..3 {
        disabled_ids.push(ctx.seed_customer(&format!("Disabled {i}"), "disabled").await);
    }
    ctx.seed_customer("Active", "active").await;

    let out = tools::list_customers(&ctx, Some("disabled".to_string()), Some(2))
        .await
        .unwrap()
        .0;
    assert_eq!(out.customers.len(), 2);
    // oldest ids first
    assert_eq!(out.customers[0].id, disabled_ids[0]);
    assert_eq!(out.customers[1].id, disabled_ids[1]);
}

#[tokio::test]
async fn list_customers_rejects_unknown_status() {
    let ctx = TestContext::new().await;

    let err = tools::list_customers(&ctx, Some("archived".to_string()), None)
        .await
        .err().unwrap();
    assert!(err.contains("invalid argument"));
    assert!(err.contains("archived"));
}

#[tokio::test]
async fn list_customers_rejects_empty_status() {
    let ctx = TestContext::new().await;

    let err = tools::list_customers(&ctx, Some(String::new()), None)
        .await
        .err().unwrap();
    assert!(err.contains("invalid argument"));
}

#[tokio::test]
async fn list_customers_rejects_nonpositive_limit() {
    let ctx = TestContext::new().await;

    let err = tools::list_customers(&ctx, None, Some(0)).await.err().unwrap();
    assert!(err.contains("limit"));
}

#[tokio::test]
async fn list_customers_empty_match_is_empty_list() {
    let ctx = TestContext::new().await;
    ctx.seed_customer("Only Active", "active").await;

    let out = tools::list_customers(&ctx, Some("disabled".to_string()), None)
        .await
        .unwrap()
        .0;
    assert!(out.customers.is_empty());
    assert_eq!(out.total, 0);
}

// ---------------------------------------------------------------------------
// update_customer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_customer_applies_partial_update() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Carol White", "active").await;
    let before = tools::get_customer(&ctx, id).await.unwrap().0.customer.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let out = tools::update_customer(
        &ctx,
        id,
        fields(&[("email", json!("carol@example.com")), ("status", json!("disabled"))]),
    )
    .await
    .unwrap()
    .0;

    let after = out.customer.unwrap();
    assert_eq!(after.email.as_deref(), Some("carol@example.com"));
    assert_eq!(after.status, "disabled");
    assert_eq!(after.name, "Carol White");
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[tokio::test]
async fn update_customer_unknown_id_is_error() {
    let ctx = TestContext::new().await;

    let err = tools::update_customer(&ctx, 424242, fields(&[("name", json!("Ghost"))]))
        .await
        .err().unwrap();
    assert!(err.contains("not found"));
    assert!(err.contains("424242"));
}

#[tokio::test]
async fn update_customer_empty_fields_is_error() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Dana Prince", "active").await;

    let err = tools::update_customer(&ctx, id, fields(&[])).await.err().unwrap();
    assert!(err.contains("no fields"));
}

#[tokio::test]
async fn update_customer_unknown_field_names_rejected() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Eve Martinez", "active").await;

    let err = tools::update_customer(
        &ctx,
        id,
        fields(&[("email", json!("e@example.com")), ("vip_level", json!(9))]),
    )
    .await
    .err().unwrap();
    assert!(err.contains("unknown field"));
    assert!(err.contains("vip_level"));

    // nothing was written
    let after = tools::get_customer(&ctx, id).await.unwrap().0.customer.unwrap();
    assert!(after.email.is_none());
}

#[tokio::test]
async fn update_customer_invalid_status_leaves_row_unchanged() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Frank Wilson", "active").await;
    let before = tools::get_customer(&ctx, id).await.unwrap().0.customer.unwrap();

    let err = tools::update_customer(&ctx, id, fields(&[("status", json!("suspended"))]))
        .await
        .err().unwrap();
    assert!(err.contains("invalid argument"));

    let after = tools::get_customer(&ctx, id).await.unwrap().0.customer.unwrap();
    assert_eq!(after.status, "active");
    assert_eq!(after.updated_at, before.updated_at);
}

// ---------------------------------------------------------------------------
// create_ticket
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_ticket_returns_stored_row() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Grace Lee", "active").await;

    let out = tools::create_ticket(&ctx, id, "Cannot export reports".to_string(), Some("high".to_string()))
        .await
        .unwrap()
        .0;

    let ticket = out.ticket.expect("ticket should be created");
    assert_eq!(ticket.customer_id, id);
    assert_eq!(ticket.status, "open");
    assert_eq!(ticket.priority, "high");
    assert!(ticket.id > 0);
}

#[tokio::test]
async fn create_ticket_defaults_to_medium_priority() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Henry Davis", "active").await;

    let out = tools::create_ticket(&ctx, id, "Sync issue".to_string(), None)
        .await
        .unwrap()
        .0;
    assert_eq!(out.ticket.unwrap().priority, "medium");
}

#[tokio::test]
async fn create_ticket_unknown_customer_writes_nothing() {
    let ctx = TestContext::new().await;

    let out = tools::create_ticket(&ctx, 777, "Orphan".to_string(), None)
        .await
        .unwrap()
        .0;
    assert!(out.ticket.is_none());
    assert!(out.message.contains("777"));
    assert_eq!(ctx.count("tickets").await, 0);
}

#[tokio::test]
async fn create_ticket_rejects_blank_issue() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Ivy Chen", "active").await;

    let err = tools::create_ticket(&ctx, id, "   ".to_string(), None)
        .await
        .err().unwrap();
    assert!(err.contains("issue"));
    assert_eq!(ctx.count("tickets").await, 0);
}

#[tokio::test]
async fn create_ticket_rejects_unknown_priority() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Jack Thompson", "active").await;

    let err = tools::create_ticket(&ctx, id, "Real issue".to_string(), Some("urgent".to_string()))
        .await
        .err().unwrap();
    assert!(err.contains("urgent"));
    assert_eq!(ctx.count("tickets").await, 0);
}

// ---------------------------------------------------------------------------
// get_customer_history
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_returns_only_that_customers_tickets_oldest_first() {
    let ctx = TestContext::new().await;
    let karen = ctx.seed_customer("Karen White", "active").await;
    let leo = ctx.seed_customer("Leo Garcia", "active").await;

    let first = tools::create_ticket(&ctx, karen, "Cannot cancel subscription".to_string(), Some("high".to_string()))
        .await
        .unwrap()
        .0
        .ticket
        .unwrap();
    tools::create_ticket(&ctx, leo, "Unrelated".to_string(), None)
        .await
        .unwrap();
    let second = tools::create_ticket(&ctx, karen, "Charged after cancellation".to_string(), Some("high".to_string()))
        .await
        .unwrap()
        .0
        .ticket
        .unwrap();

    let out = tools::customer_history(&ctx, karen).await.unwrap().0;
    assert_eq!(out.total, 2);
    assert_eq!(out.tickets[0].id, first.id);
    assert_eq!(out.tickets[1].id, second.id);
    assert!(out.tickets.iter().all(|t| t.customer_id == karen));
}

#[tokio::test]
async fn history_empty_for_customer_without_tickets() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_customer("Maria Rodriguez", "active").await;

    let out = tools::customer_history(&ctx, id).await.unwrap().0;
    assert!(out.tickets.is_empty());
    assert_eq!(out.total, 0);
}

#[tokio::test]
async fn history_empty_for_unknown_customer() {
    let ctx = TestContext::new().await;

    let out = tools::customer_history(&ctx, 5555).await.unwrap().0;
    assert!(out.tickets.is_empty());
}
