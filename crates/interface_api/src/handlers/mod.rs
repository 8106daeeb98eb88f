//! Request handlers

pub mod claims;
pub mod health;
pub mod manager;
pub mod tracking;
