//! HTTP request handlers

pub mod controls;
pub mod health;
pub mod map;
pub mod page;
pub mod search;
