//! Shared Dioxus components and browser data loader for the county health
//! dashboard.
//!
//! This crate provides:
//! - `config`: chart dimensions, margins, data URLs and DOM ids
//! - `state`: Reactive AppState with Dioxus Signals
//! - `loader`: fetches the topology and CSV, fills the store and projects shapes
//! - `components`: the map, histogram, scatterplot and their controls

pub mod components;
pub mod config;
pub mod loader;
pub mod state;
