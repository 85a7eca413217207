//! Adapter Layer
//!
//! 外部システム（PagerDuty API, dotfile, 標準出力・ファイル）との統合

pub mod config;
pub mod output;
pub mod pagerduty;
