//! FilmStore
//!
//! Client for the FilmStore movie backend: catalog browsing, a cart that
//! folds duplicate lines into groups, and device-local favorites.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod favorites;
pub mod gateway;
pub mod ids;
pub mod models;
pub mod observability;
pub mod pricing;
pub mod state;

#[cfg(test)]
mod test;
