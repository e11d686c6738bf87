//! Shared test fixtures: in-memory database + seed helpers
#![allow(dead_code)]

use mesa_server::auth::password;
use mesa_server::db::DbService;
use mesa_server::db::repository::{category, dining_table, menu_item, restaurant, user};
use shared::models::{
    CategoryCreate, DiningTableCreate, MenuItem, MenuItemCreate, RestaurantCreate, Role, User,
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Password used by every seeded account
pub const TEST_PASSWORD: &str = "hunter22-test";

/// In-memory SQLite with migrations applied.
///
/// A single connection: each `:memory:` connection is its own database, so
/// the pool must never open a second one.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("failed to enable foreign keys");
    DbService::migrate(&pool).await.expect("migrations failed");
    pool
}

/// File-backed database for tests that need real cross-connection locking.
/// Returns the temp dir so it lives as long as the pool.
pub async fn setup_file_pool() -> (tempfile::TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("mesa-test.db");
    let service = DbService::new(&db_path.to_string_lossy())
        .await
        .expect("failed to open file-backed database");
    (dir, service.pool)
}

pub async fn seed_restaurant(pool: &SqlitePool) -> i64 {
    let tenant = restaurant::create(
        pool,
        RestaurantCreate {
            name: "Trattoria Test".to_string(),
            address: "1 Test Street".to_string(),
            contact_info: "+00 000".to_string(),
            identifier: "test-0001".to_string(),
        },
    )
    .await
    .expect("failed to seed restaurant");
    tenant.id
}

pub async fn seed_user(
    pool: &SqlitePool,
    restaurant_id: Option<i64>,
    role: Role,
    email: &str,
) -> User {
    let hash = password::hash_password(TEST_PASSWORD).expect("hashing failed");
    user::create(pool, restaurant_id, "Test User", email, &hash, role)
        .await
        .expect("failed to seed user")
}

/// Two menu items priced 10.00 and 15.00 in one category
pub async fn seed_menu(pool: &SqlitePool, restaurant_id: i64) -> Vec<MenuItem> {
    let cat = category::create(
        pool,
        CategoryCreate {
            restaurant_id,
            name: "Mains".to_string(),
            description: None,
        },
    )
    .await
    .expect("failed to seed category");

    let mut items = Vec::new();
    for (name, price) in [("Margherita", 10.0), ("Carbonara", 15.0)] {
        let item = menu_item::create(
            pool,
            MenuItemCreate {
                restaurant_id,
                category_id: cat.id,
                name: name.to_string(),
                description: None,
                price,
                availability: true,
            },
        )
        .await
        .expect("failed to seed menu item");
        items.push(item);
    }
    items
}

pub async fn seed_table(pool: &SqlitePool, restaurant_id: i64) -> i64 {
    let table = dining_table::create(
        pool,
        DiningTableCreate {
            restaurant_id,
            table_number: "1".to_string(),
            seating_capacity: 4,
            link: None,
        },
    )
    .await
    .expect("failed to seed table");
    table.id
}
