pub mod defaults;
pub mod error;
pub mod loader;

pub use defaults::default_catalog;
pub use error::CatalogError;
pub use loader::{CATALOG_ENV_VAR, catalog_from_env_or_default, load_catalog};
