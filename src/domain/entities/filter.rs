//! # Incident Filter
//!
//! インシデント検索条件のバリューオブジェクト

use super::incident::Urgency;

/// インシデント検索条件
///
/// `since` / `until` は正規化済みの ISO-8601 文字列。
/// 未指定の場合はプロバイダーのデフォルト（約1ヶ月、最大6ヶ月）が使われる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentFilter {
    pub since: Option<String>,
    pub until: Option<String>,
    pub statuses: Vec<String>,
    pub team_ids: Vec<String>,
    pub urgencies: Vec<Urgency>,
    pub time_zone: Option<String>,
}

impl IncidentFilter {
    /// 緊急度の指定から有効な緊急度リストを返す
    ///
    /// 未指定なら `low` と `high` の両方
    pub fn effective_urgencies(urgency: Option<Urgency>) -> Vec<Urgency> {
        match urgency {
            Some(u) => vec![u],
            None => Urgency::ALL.to_vec(),
        }
    }
}

impl Default for IncidentFilter {
    fn default() -> Self {
        Self {
            since: None,
            until: None,
            statuses: Vec::new(),
            team_ids: Vec::new(),
            urgencies: Urgency::ALL.to_vec(),
            time_zone: None,
        }
    }
}
