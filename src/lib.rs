//! # Pincidents
//!
//! PagerDuty REST API を参照するコマンドラインツール群
//!
//! - `oncall`: ユーザーが現在オンコール中か判定
//! - `teams`: APIトークン所有者の所属チーム一覧
//! - `export-incidents`: インシデント履歴を CSV にエクスポート
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、Repository trait、変換ロジック（HTTP に依存しない）
//! - **Application層**: コマンドごとのユースケース
//! - **Adapter層**: PagerDuty API クライアント、dotfile、出力形式
//! - **Driver層**: CLI、引数解決、終了コード、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
