pub mod health;
pub mod home;
pub mod info;

pub use health::health_check;
pub use home::home;
pub use info::info;
