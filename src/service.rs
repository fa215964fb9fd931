pub mod aggregation;
pub mod filter;
pub mod page;
pub mod session;
