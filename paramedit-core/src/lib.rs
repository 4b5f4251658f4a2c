pub mod action;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod labels;
pub mod model;
pub mod seed;
pub mod state;
