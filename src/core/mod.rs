pub mod add;
pub mod aggregate;
pub mod auth;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod log;
pub mod photo;

pub use calculator::{Calculation, calculate};
