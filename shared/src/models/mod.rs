//! Entity models shared between the server and its clients
//!
//! Each entity follows the same triple: the row model (sqlx-mappable when
//! the `db` feature is on), a `*Create` payload, and — where the API allows
//! partial edits — an `*Update` payload with all-optional fields.

pub mod cart;
pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod restaurant;
pub mod user;

pub use cart::{Cart, CartSetItems, CartWithItems};
pub use category::{Category, CategoryCreate};
pub use dining_table::{DiningTable, DiningTableCreate};
pub use menu_item::{MenuItem, MenuItemCreate};
pub use order::{Order, OrderItem, OrderStatus, OrderStatusUpdate, OrderWithItems};
pub use payment::{Payment, PaymentCreate, PaymentStatus, Receipt, Transaction};
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantUpdate};
pub use user::{ProfileUpdate, RegisterRequest, Role, User, UserAdminCreate, UserAdminUpdate};
