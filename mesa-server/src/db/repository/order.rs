//! Order Repository
//!
//! 结账工作流：把购物车原子地转换为不可变订单（订单 + 行项目 + 清空购物车
//! 在同一个事务里），以及订单状态机的持久化。

use super::{RepoError, RepoResult};
use crate::money;
use shared::models::{MenuItem, Order, OrderItem, OrderStatus, OrderWithItems};
use sqlx::SqlitePool;

const ORDER_SELECT: &str = "SELECT id, restaurant_id, table_id, user_id, total_price, status, \
     created_at, updated_at FROM orders";

const ORDER_ITEM_SELECT: &str =
    "SELECT id, order_id, item_id, quantity, price FROM order_item WHERE order_id = ?";

/// Convert the user's cart into an order.
///
/// Runs entirely inside one transaction: the order snapshot, its line items
/// and the cart clear become visible together or not at all. The first
/// statement is a write on the cart row so a concurrent checkout serializes
/// behind the write lock and then observes the already-cleared cart.
pub async fn create_from_cart(pool: &SqlitePool, user_id: i64) -> RepoResult<OrderWithItems> {
    let mut tx = pool.begin().await?;

    let now = shared::util::now_millis();
    let touched = sqlx::query("UPDATE cart SET updated_at = ?1 WHERE user_id = ?2")
        .bind(now)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    if touched.rows_affected() == 0 {
        return Err(RepoError::EmptyCart);
    }

    let cart: (i64, i64, f64) = sqlx::query_as(
        "SELECT id, restaurant_id, total_price FROM cart WHERE user_id = ? ORDER BY created_at LIMIT 1",
    )
    .bind(user_id)
    .fetch_one(&mut *tx)
    .await?;
    let (cart_id, restaurant_id, cart_total) = cart;

    let items: Vec<MenuItem> = sqlx::query_as(
        "SELECT m.id, m.restaurant_id, m.category_id, m.name, m.description, m.price, \
         m.availability FROM menu_item m JOIN cart_item ci ON ci.item_id = m.id \
         WHERE ci.cart_id = ?",
    )
    .bind(cart_id)
    .fetch_all(&mut *tx)
    .await?;
    if items.is_empty() {
        return Err(RepoError::EmptyCart);
    }

    // Order snapshot: total copied from the cart, status starts at pending.
    let order_id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO orders (id, restaurant_id, table_id, user_id, total_price, status, \
         created_at, updated_at) VALUES (?1, ?2, NULL, ?3, ?4, ?5, ?6, ?6)",
    )
    .bind(order_id)
    .bind(restaurant_id)
    .bind(user_id)
    .bind(cart_total)
    .bind(OrderStatus::Pending)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    // One line item per distinct cart entry; quantity is always 1 because
    // the cart holds a set, not a bag. Prices are frozen here.
    let mut order_items = Vec::with_capacity(items.len());
    for item in &items {
        let quantity = 1i64;
        let price = money::line_price(item.price, quantity);
        let line_id = shared::util::snowflake_id();
        sqlx::query(
            "INSERT INTO order_item (id, order_id, item_id, quantity, price) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(line_id)
        .bind(order_id)
        .bind(item.id)
        .bind(quantity)
        .bind(price)
        .execute(&mut *tx)
        .await?;
        order_items.push(OrderItem {
            id: line_id,
            order_id,
            item_id: item.id,
            quantity,
            price,
        });
    }

    // Clear the cart inside the same transaction.
    sqlx::query("DELETE FROM cart_item WHERE cart_id = ?")
        .bind(cart_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE cart SET total_price = 0, updated_at = ?1 WHERE id = ?2")
        .bind(now)
        .bind(cart_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(
        order_id,
        user_id,
        restaurant_id,
        total = cart_total,
        items = order_items.len(),
        "Order created from cart"
    );

    Ok(OrderWithItems {
        order: Order {
            id: order_id,
            restaurant_id,
            table_id: None,
            user_id,
            total_price: cart_total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        },
        order_items,
        items,
    })
}

/// Attach the line items to an order row
async fn with_items(pool: &SqlitePool, order: Order) -> RepoResult<OrderWithItems> {
    let order_items = sqlx::query_as::<_, OrderItem>(ORDER_ITEM_SELECT)
        .bind(order.id)
        .fetch_all(pool)
        .await?;
    Ok(OrderWithItems {
        order,
        order_items,
        items: Vec::new(),
    })
}

/// List a user's own orders, newest first
pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<OrderWithItems>> {
    let sql = format!("{ORDER_SELECT} WHERE user_id = ? ORDER BY created_at DESC");
    let orders = sqlx::query_as::<_, Order>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    let mut result = Vec::with_capacity(orders.len());
    for order in orders {
        result.push(with_items(pool, order).await?);
    }
    Ok(result)
}

/// Fetch one order without ownership filtering (staff surface)
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderWithItems>> {
    let sql = format!("{ORDER_SELECT} WHERE id = ?");
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match order {
        Some(order) => Ok(Some(with_items(pool, order).await?)),
        None => Ok(None),
    }
}

/// Fetch one order owned by `user_id`; other users' orders are invisible
pub async fn find_by_id_for_user(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> RepoResult<Option<OrderWithItems>> {
    let sql = format!("{ORDER_SELECT} WHERE id = ?1 AND user_id = ?2");
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    match order {
        Some(order) => Ok(Some(with_items(pool, order).await?)),
        None => Ok(None),
    }
}

/// List every order, newest first (staff surface)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<OrderWithItems>> {
    let sql = format!("{ORDER_SELECT} ORDER BY created_at DESC");
    let orders = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;
    let mut result = Vec::with_capacity(orders.len());
    for order in orders {
        result.push(with_items(pool, order).await?);
    }
    Ok(result)
}

/// Move an order through the status machine; illegal transitions are
/// rejected before anything is written.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    next: OrderStatus,
    table_id: Option<i64>,
) -> RepoResult<OrderWithItems> {
    let mut tx = pool.begin().await?;

    let current: Option<(OrderStatus,)> =
        sqlx::query_as("SELECT status FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((current,)) = current else {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    };
    if !current.can_transition_to(next) {
        return Err(RepoError::Validation(format!(
            "illegal order status transition: {current} -> {next}"
        )));
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE orders SET status = ?1, table_id = COALESCE(?2, table_id), updated_at = ?3 \
         WHERE id = ?4",
    )
    .bind(next)
    .bind(table_id)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Remove an order and (via cascade) its line items (staff surface)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
