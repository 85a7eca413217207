//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供
//! - 遅延シーケンス `Paginated` はページ取得を明示的に行う

pub mod incident_sink;
pub mod paginated;
pub mod pagerduty_repository;
