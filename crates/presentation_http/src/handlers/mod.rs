//! HTTP request handlers

pub mod health;
pub mod plan;
pub mod suggest;
