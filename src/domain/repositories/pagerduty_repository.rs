//! # PagerDuty Repository Trait
//!
//! PagerDuty API へのアクセスを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::filter::IncidentFilter;
use crate::domain::entities::incident::{Incident, Note};
use crate::domain::entities::user::{OnCallEntry, Team, User};
use crate::domain::errors::ApiError;
use crate::domain::repositories::paginated::Paginated;

/// PagerDuty リポジトリ
///
/// 読み取り専用の API 呼び出しを提供する。リトライは行わない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PagerDutyRepository: Send + Sync {
    /// APIトークンの所有者を取得
    ///
    /// # Errors
    ///
    /// トークンが無効・未設定の場合は `ApiError::Auth`
    async fn current_user(&self) -> Result<User, ApiError>;

    /// 指定ユーザーのオンコールエントリを取得
    async fn on_call_entries(&self, user_ids: &[String]) -> Result<Paginated<OnCallEntry>, ApiError>;

    /// APIトークンの所有者が所属するチームを取得
    async fn teams_of_current_user(&self) -> Result<Paginated<Team>, ApiError>;

    /// 条件に一致するインシデントを取得
    async fn incidents(&self, filter: &IncidentFilter) -> Result<Paginated<Incident>, ApiError>;

    /// インシデントのノートを取得
    async fn incident_notes(&self, incident_id: &str) -> Result<Paginated<Note>, ApiError>;
}
