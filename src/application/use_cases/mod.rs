//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **CheckOnCallUseCase**: ユーザーがオンコール中か判定
//! - **ListTeamsUseCase**: 所属チームの一覧
//! - **ExportIncidentsUseCase**: インシデント履歴のエクスポート

pub mod check_oncall;
pub mod export_incidents;
pub mod list_teams;
