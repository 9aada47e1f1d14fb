//! Request handlers

pub mod accounts;
pub mod health;
pub mod journal;
pub mod reports;
pub mod sales;
