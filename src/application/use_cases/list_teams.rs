//! # List Teams Use Case
//!
//! 所属チーム一覧ユースケース

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::entities::user::Team;
use crate::domain::repositories::pagerduty_repository::PagerDutyRepository;

/// 所属チーム一覧ユースケース
pub struct ListTeamsUseCase<R: PagerDutyRepository> {
    repository: Arc<R>,
}

impl<R: PagerDutyRepository> ListTeamsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// トークン所有者の所属チームを返す
    ///
    /// # Errors
    ///
    /// API 呼び出しに失敗した場合にエラーを返す
    pub async fn execute(&self) -> Result<Vec<Team>> {
        let teams = self
            .repository
            .teams_of_current_user()
            .await?
            .collect_all()
            .await?;

        info!("Current user belongs to {} teams", teams.len());

        Ok(teams)
    }
}
