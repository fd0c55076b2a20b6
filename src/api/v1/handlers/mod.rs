pub mod briefings;
pub mod generate;
pub(crate) mod health;
pub mod profile;

pub use health::health_check;
