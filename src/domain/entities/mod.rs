//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Incident**: インシデントとノート、エクスポート行
//! - **User / Team / OnCallEntry**: ユーザーとその所属・オンコール状態
//! - **IncidentFilter**: インシデント検索条件のバリューオブジェクト

pub mod filter;
pub mod incident;
pub mod user;
