//! Entity structs for all Logix back-office resources.
//!
//! Each entity mirrors a REST resource. Field names follow the server's
//! camelCase JSON with `_id` as the primary key. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation.

mod batch;
mod customer;
mod employee;
mod hub;
mod loader;
mod order;
mod organization;
mod route;

pub use batch::{AttachedOrder, Drs, Manifest};
pub use customer::Customer;
pub use employee::Employee;
pub use hub::Hub;
pub use loader::Loader;
pub use order::{Order, OrderItem, Party};
pub use organization::Organization;
pub use route::Route;
