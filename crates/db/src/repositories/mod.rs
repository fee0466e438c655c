//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod business_info_repo;
pub mod category_repo;
pub mod language_repo;
pub mod menu_item_repo;
pub mod review_repo;

pub use business_info_repo::BusinessInfoRepo;
pub use category_repo::CategoryRepo;
pub use language_repo::LanguageRepo;
pub use menu_item_repo::MenuItemRepo;
pub use review_repo::ReviewRepo;
