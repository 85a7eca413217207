//! # Output Writers
//!
//! 出力形式の実装
//!
//! - **incident_writer**: インシデント行の CSV / plain 出力
//! - **lines**: チーム一覧とオンコール判定の1行出力

pub mod incident_writer;
pub mod lines;

pub use incident_writer::IncidentWriter;
