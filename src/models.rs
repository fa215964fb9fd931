pub mod filter;
pub mod health;
pub mod join;
pub mod location;
pub mod overview;
pub mod page;
pub mod session;
