//! Cart engine behaviour: lazy creation, wholesale replacement, totals,
//! idempotent clearing.

mod support;

use mesa_server::db::repository::{RepoError, cart};
use shared::models::Role;

#[tokio::test]
async fn get_or_create_returns_the_same_cart() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;

    let first = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    let second = cart::get_or_create(&pool, user.id, rid).await.unwrap();

    assert_eq!(first.id, second.id, "repeated calls must converge on one cart");
    assert_eq!(first.total_price, 0.0);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cart WHERE user_id = ?")
        .bind(user.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn set_items_replaces_wholesale_and_recomputes_total() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();

    let basket = cart::set_items(&pool, basket.id, &[items[0].id, items[1].id])
        .await
        .unwrap();
    assert_eq!(basket.total_price, 25.0);
    assert_eq!(cart::items(&pool, basket.id).await.unwrap().len(), 2);

    // Not additive: posting a single id drops the other item
    let basket = cart::set_items(&pool, basket.id, &[items[1].id]).await.unwrap();
    assert_eq!(basket.total_price, 15.0);
    let remaining = cart::items(&pool, basket.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, items[1].id);
}

#[tokio::test]
async fn set_items_collapses_duplicates() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    let basket = cart::set_items(&pool, basket.id, &[items[0].id, items[0].id])
        .await
        .unwrap();

    assert_eq!(cart::items(&pool, basket.id).await.unwrap().len(), 1);
    assert_eq!(basket.total_price, 10.0);
}

#[tokio::test]
async fn set_items_rejects_unknown_ids() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    let err = cart::set_items(&pool, basket.id, &[items[0].id, 999_999])
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // Nothing was applied
    assert!(cart::items(&pool, basket.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn clear_is_idempotent() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let items = support::seed_menu(&pool, rid).await;

    let basket = cart::get_or_create(&pool, user.id, rid).await.unwrap();
    cart::set_items(&pool, basket.id, &[items[0].id]).await.unwrap();

    cart::clear(&pool, basket.id).await.unwrap();
    // Clearing an already empty cart succeeds as well
    cart::clear(&pool, basket.id).await.unwrap();

    let basket = cart::find_by_user(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(basket.total_price, 0.0);
    assert!(cart::items(&pool, basket.id).await.unwrap().is_empty());
}
