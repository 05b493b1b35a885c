pub mod health;
pub mod networks;

pub use health::health_check;
