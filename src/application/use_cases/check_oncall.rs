//! # Check On-Call Use Case
//!
//! オンコール判定ユースケース

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::domain::entities::user::{OnCallStatus, UserSelector};
use crate::domain::repositories::pagerduty_repository::PagerDutyRepository;

/// オンコール判定ユースケース
///
/// `me` はトークン所有者のIDに解決してから問い合わせる
pub struct CheckOnCallUseCase<R: PagerDutyRepository> {
    repository: Arc<R>,
}

impl<R: PagerDutyRepository> CheckOnCallUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// オンコール状態を判定
    ///
    /// # Errors
    ///
    /// API 呼び出しに失敗した場合にエラーを返す
    pub async fn execute(&self, selector: &UserSelector) -> Result<OnCallStatus> {
        let user_id = match selector {
            UserSelector::CurrentUser => {
                let user = self.repository.current_user().await?;
                debug!("Resolved 'me' to user {}", user.id);
                user.id
            }
            UserSelector::Id(id) => id.clone(),
        };

        let entries = self
            .repository
            .on_call_entries(std::slice::from_ref(&user_id))
            .await?;
        let on_call_count = entries.count().await?;

        info!("User {} has {} on-call entries", user_id, on_call_count);

        Ok(OnCallStatus {
            user_id,
            on_call_count,
        })
    }
}
