//! `SeaORM` entity definitions.

pub mod inventory;
pub mod sea_orm_active_enums;
pub mod settings;
pub mod transactions;

pub mod prelude {
    //! Entity re-exports.
    pub use super::inventory::Entity as Inventory;
    pub use super::settings::Entity as Settings;
    pub use super::transactions::Entity as Transactions;
}
