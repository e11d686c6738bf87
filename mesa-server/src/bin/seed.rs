//! Demo data seeder
//!
//! 向数据库写入演示数据：餐厅、三种角色的账号、桌台、分类和菜品。
//!
//! ```text
//! WORK_DIR=/tmp/mesa cargo run --bin seed
//! ```
//!
//! All seeded accounts use the password printed at the end of the run.

use mesa_server::auth::password;
use mesa_server::db::repository::{category, dining_table, menu_item, restaurant, user};
use mesa_server::{Config, ServerState, setup_environment};
use rand::Rng;
use shared::models::{
    CategoryCreate, DiningTableCreate, MenuItemCreate, RestaurantCreate, Role,
};

const SEED_PASSWORD: &str = "mesa-demo-123";

const RESTAURANTS: &[(&str, &str)] = &[
    ("Trattoria Aurora", "Via Roma 12, Lisboa"),
    ("Golden Wok", "Rua das Flores 88, Porto"),
];

const CATEGORIES: &[&str] = &["Starters", "Mains", "Desserts"];

const DISHES: &[(&str, f64)] = &[
    ("Bruschetta", 6.5),
    ("Caprese Salad", 8.0),
    ("Margherita", 10.0),
    ("Carbonara", 13.5),
    ("Risotto ai Funghi", 14.0),
    ("Tiramisu", 5.5),
    ("Panna Cotta", 5.0),
    ("Espresso", 1.8),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_environment();

    let config = Config::from_env();
    let state = ServerState::initialize(&config).await;
    let pool = &state.pool;
    let mut rng = rand::thread_rng();

    let password_hash = password::hash_password(SEED_PASSWORD)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;

    // Platform admin, not bound to any restaurant
    let admin = user::create(pool, None, "Admin", "admin@mesa.local", &password_hash, Role::Admin)
        .await?;
    tracing::info!(user_id = admin.id, "Created admin account admin@mesa.local");

    for (idx, (name, address)) in RESTAURANTS.iter().enumerate() {
        let tenant = restaurant::create(
            pool,
            RestaurantCreate {
                name: name.to_string(),
                address: address.to_string(),
                contact_info: format!("+351 21 000 00{idx}"),
                identifier: format!("mesa-{:04}", idx + 1),
            },
        )
        .await?;
        tracing::info!(restaurant_id = tenant.id, name = %tenant.name, "Created restaurant");

        user::create(
            pool,
            Some(tenant.id),
            "Staff",
            &format!("staff{}@mesa.local", idx + 1),
            &password_hash,
            Role::Staff,
        )
        .await?;
        for c in 1..=2 {
            user::create(
                pool,
                Some(tenant.id),
                &format!("Customer {c}"),
                &format!("customer{}-{}@mesa.local", idx + 1, c),
                &password_hash,
                Role::Customer,
            )
            .await?;
        }

        for n in 1..=5 {
            dining_table::create(
                pool,
                DiningTableCreate {
                    restaurant_id: tenant.id,
                    table_number: n.to_string(),
                    seating_capacity: rng.gen_range(2..=8),
                    link: None,
                },
            )
            .await?;
        }

        for cat_name in CATEGORIES {
            let cat = category::create(
                pool,
                CategoryCreate {
                    restaurant_id: tenant.id,
                    name: cat_name.to_string(),
                    description: None,
                },
            )
            .await?;

            for _ in 0..3 {
                let (dish, price) = DISHES[rng.gen_range(0..DISHES.len())];
                menu_item::create(
                    pool,
                    MenuItemCreate {
                        restaurant_id: tenant.id,
                        category_id: cat.id,
                        name: dish.to_string(),
                        description: None,
                        price,
                        availability: true,
                    },
                )
                .await?;
            }
        }
    }

    tracing::info!("Seed complete; all accounts use password {SEED_PASSWORD:?}");
    Ok(())
}
