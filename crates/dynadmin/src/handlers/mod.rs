pub mod endpoint;
pub mod error;
pub mod health;
pub mod items;
pub mod tables;

pub use error::AppError;
