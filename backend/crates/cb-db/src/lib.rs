pub mod error;
pub mod pool;
pub mod repositories;

pub use error::{DbError, Result};
pub use pool::{connect, run_migrations};
pub use repositories::output_repository::OutputRepository;
