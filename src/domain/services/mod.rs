//! # Domain Services
//!
//! - **record_transformer**: インシデントのエクスポート行への変換
//! - **clock**: 現在時刻

pub mod clock;
pub mod record_transformer;
