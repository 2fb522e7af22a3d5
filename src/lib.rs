//! Tic Tac Toe - multiplayer game backend
//!
//! Users register by name, play games against each other through a REST
//! API, and accumulate wins and a win percentage. Finished games are recorded
//! as scores. Background jobs email reminders and keep a cached statistic
//! of the moves remaining across games in progress.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
