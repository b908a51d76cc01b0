pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod menu;
pub mod observability;
pub mod ui;
pub mod view;

pub use controller::{Controller, SessionState};
pub use events::Action;
