//! HTTP handlers

pub mod health;
pub mod planets;
pub mod predict;
