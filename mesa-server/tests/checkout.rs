//! Checkout workflow: cart → order conversion, snapshot semantics,
//! atomicity under concurrent checkouts.

mod support;

use mesa_server::db::repository::{RepoError, cart, menu_item, order};
use shared::models::{MenuItemCreate, OrderStatus, Role};

#[tokio::test]
async fn checkout_without_cart_fails_and_writes_nothing() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;

    let err = order::create_from_cart(&pool, user.id).await.unwrap_err();
    assert!(matches!(err, RepoError::EmptyCart));

    let orders: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orders.0, 0);
}

#[tokio::test]
async fn checkout_with_empty_cart_fails_and_writes_nothing() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    cart::get_or_create(&pool, user.id, rid).await.unwrap();

    let err = order::create_from_cart(&pool, user.id).await.unwrap_err();
    assert!(matches!(err, RepoError::EmptyCart));

    let counts: (i64, i64) =
        sqlx::query_as("SELECT (SELECT COUNT(*) FROM orders), (SELECT COUNT(*) FROM order_item)")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(counts, (0, 0));
}

#[tokio::test]
async fn checkout_snapshots_the_cart() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await; // 10.00 + 15.00

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    cart::set_items(&pool, basket.id, &[items[0].id, items[1].id])
        .await
        .unwrap();

    let created = order::create_from_cart(&pool, user.id).await.unwrap();

    assert_eq!(created.order.total_price, 25.0);
    assert_eq!(created.order.status, OrderStatus::Pending);
    assert_eq!(created.order.restaurant_id, rid);
    assert_eq!(created.order.table_id, None);
    assert_eq!(created.order_items.len(), 2);
    let mut prices: Vec<f64> = created.order_items.iter().map(|i| i.price).collect();
    prices.sort_by(f64::total_cmp);
    assert_eq!(prices, vec![10.0, 15.0]);
    assert!(created.order_items.iter().all(|i| i.quantity == 1));

    // Cart cleared in the same transaction
    let basket = cart::find_by_user(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(basket.total_price, 0.0);
    assert!(cart::items(&pool, basket.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn order_total_equals_sum_of_line_items() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    cart::set_items(&pool, basket.id, &[items[0].id, items[1].id])
        .await
        .unwrap();
    let created = order::create_from_cart(&pool, user.id).await.unwrap();

    let sum: (f64,) = sqlx::query_as("SELECT SUM(price) FROM order_item WHERE order_id = ?")
        .bind(created.order.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(sum.0, created.order.total_price);
}

#[tokio::test]
async fn line_item_prices_stay_frozen_after_menu_edits() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    cart::set_items(&pool, basket.id, &[items[0].id]).await.unwrap();
    let created = order::create_from_cart(&pool, user.id).await.unwrap();

    // The menu price changes after checkout
    sqlx::query("UPDATE menu_item SET price = 99.0 WHERE id = ?")
        .bind(items[0].id)
        .execute(&pool)
        .await
        .unwrap();

    let reread = order::find_by_id(&pool, created.order.id).await.unwrap().unwrap();
    assert_eq!(reread.order_items[0].price, 10.0);
    assert_eq!(reread.order.total_price, 10.0);
}

#[tokio::test]
async fn second_checkout_sees_the_cleared_cart() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    cart::set_items(&pool, basket.id, &[items[0].id]).await.unwrap();

    assert!(order::create_from_cart(&pool, user.id).await.is_ok());
    let err = order::create_from_cart(&pool, user.id).await.unwrap_err();
    assert!(matches!(err, RepoError::EmptyCart));
}

#[tokio::test]
async fn concurrent_checkouts_yield_exactly_one_order() {
    // File-backed database: real cross-connection locking (WAL + busy_timeout)
    let (_dir, pool) = support::setup_file_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    cart::set_items(&pool, basket.id, &[items[0].id, items[1].id])
        .await
        .unwrap();

    let a = tokio::spawn({
        let pool = pool.clone();
        async move { order::create_from_cart(&pool, user.id).await }
    });
    let b = tokio::spawn({
        let pool = pool.clone();
        async move { order::create_from_cart(&pool, user.id).await }
    });

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one checkout may succeed");
    assert!(
        results
            .iter()
            .any(|r| matches!(r, Err(RepoError::EmptyCart))),
        "the loser must observe the cleared cart"
    );

    let orders: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orders.0, 1);
}

#[tokio::test]
async fn status_machine_is_enforced_on_updates() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    cart::set_items(&pool, basket.id, &[items[0].id]).await.unwrap();
    let created = order::create_from_cart(&pool, user.id).await.unwrap();
    let id = created.order.id;

    // pending → completed skips processing
    let err = order::update_status(&pool, id, OrderStatus::Completed, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let updated = order::update_status(&pool, id, OrderStatus::Processing, None)
        .await
        .unwrap();
    assert_eq!(updated.order.status, OrderStatus::Processing);
    let updated = order::update_status(&pool, id, OrderStatus::Completed, None)
        .await
        .unwrap();
    assert_eq!(updated.order.status, OrderStatus::Completed);

    // Terminal state accepts nothing
    let err = order::update_status(&pool, id, OrderStatus::Cancelled, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn negative_menu_prices_are_rejected_at_write_time() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let items = support::seed_menu(&pool, rid).await;

    let err = menu_item::create(
        &pool,
        MenuItemCreate {
            restaurant_id: rid,
            category_id: items[0].category_id,
            name: "Impossible Dish".to_string(),
            description: None,
            price: -1.0,
            availability: true,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // The CHECK constraint backstops direct writes too
    let raw = sqlx::query(
        "INSERT INTO menu_item (id, restaurant_id, category_id, name, price, availability) \
         VALUES (1, ?1, ?2, 'Raw', -5.0, 1)",
    )
    .bind(rid)
    .bind(items[0].category_id)
    .execute(&pool)
    .await;
    assert!(raw.is_err());
}
