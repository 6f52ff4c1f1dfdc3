pub mod categories;
pub mod db;
pub mod documents;
pub mod models;
pub mod questions;
pub mod schema;
pub mod subscriptions;
pub mod uploads;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
