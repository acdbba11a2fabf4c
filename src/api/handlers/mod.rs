mod contact;
mod health;

pub use contact::contact_handler;
pub use health::health_handler;
