pub mod config;
pub mod contract;
pub mod error;
mod events;
mod helpers;
pub mod instantiate;
pub mod post;
pub mod query;
pub mod state;
pub mod vote;
