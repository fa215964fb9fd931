pub mod error;
pub mod health;
pub mod location;
pub mod overview;
pub mod page;
pub mod session;
