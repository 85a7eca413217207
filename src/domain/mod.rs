//! # Domain Layer
//!
//! このモジュールは PagerDuty レポートの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTP や CLI について何も知らない
//! - API 呼び出しと出力先は trait として定義し、Adapter 層で実装する
//! - 純粋な変換ロジック（継続時間、ノート連結、グループ平坦化）
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Incident, Team, IncidentFilterなど）
//! - **errors**: API エラーの分類
//! - **repositories**: Repository trait と遅延シーケンス
//! - **services**: Domain Service（Record Transformer, Clock）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
