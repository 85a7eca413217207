//! PagerDuty REST API adapter

pub mod client;
pub mod models;

pub use client::PagerDutyClient;
