//! # Incident Entity
//!
//! インシデントのドメインエンティティ

use serde::{Deserialize, Serialize};
use std::fmt;

/// インシデントの緊急度
///
/// PagerDuty が扱う `low` / `high` の2値のみ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    High,
}

impl Urgency {
    /// 全ての緊急度（フィルタ未指定時のデフォルト）
    pub const ALL: [Urgency; 2] = [Urgency::Low, Urgency::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// インシデントに付与されたノート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// インシデントのドメインエンティティ
///
/// タイムスタンプはプロバイダーが返した文字列のまま保持する。
/// 継続時間は保存せず、レポート生成時に導出する。
/// ノートは `PagerDutyRepository::incident_notes` で遅延取得する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    pub id: String,
    pub urgency: Urgency,
    pub created_at: String,
    pub last_status_change_at: String,
    pub title: String,
    /// `triggered` / `acknowledged` / `resolved` またはプロバイダー定義の値
    pub status: String,
    pub html_url: String,
}

impl Incident {
    pub const STATUS_RESOLVED: &'static str = "resolved";

    /// 解決済みかどうか
    pub fn is_resolved(&self) -> bool {
        self.status == Self::STATUS_RESOLVED
    }
}

/// エクスポート用の行
///
/// CSV と plain 出力で共通の9フィールド固定順
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRow {
    pub id: String,
    pub urgency: String,
    pub created_at: String,
    pub last_status_change_at: String,
    pub title: String,
    pub status: String,
    pub duration: String,
    pub url: String,
    pub notes: String,
}

impl IncidentRow {
    pub const FIELD_COUNT: usize = 9;

    /// フィールドを出力順に返す
    pub fn fields(&self) -> [&str; Self::FIELD_COUNT] {
        [
            &self.id,
            &self.urgency,
            &self.created_at,
            &self.last_status_change_at,
            &self.title,
            &self.status,
            &self.duration,
            &self.url,
            &self.notes,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_incident(status: &str) -> Incident {
        Incident {
            id: "PINC001".to_string(),
            urgency: Urgency::High,
            created_at: "2024-12-25T10:00:00Z".to_string(),
            last_status_change_at: "2024-12-25T11:00:00Z".to_string(),
            title: "Database down".to_string(),
            status: status.to_string(),
            html_url: "https://example.pagerduty.com/incidents/PINC001".to_string(),
        }
    }

    #[test]
    fn test_is_resolved() {
        assert!(create_test_incident("resolved").is_resolved());
        assert!(!create_test_incident("triggered").is_resolved());
        assert!(!create_test_incident("acknowledged").is_resolved());
        assert!(!create_test_incident("Resolved").is_resolved());
    }

    #[test]
    fn test_urgency_serde() {
        let low: Urgency = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(low, Urgency::Low);
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"high\"");
        assert!(serde_json::from_str::<Urgency>("\"medium\"").is_err());
    }

    #[test]
    fn test_urgency_display() {
        assert_eq!(Urgency::Low.to_string(), "low");
        assert_eq!(Urgency::ALL, [Urgency::Low, Urgency::High]);
    }

    #[test]
    fn test_row_fields_order() {
        let row = IncidentRow {
            id: "1".to_string(),
            urgency: "2".to_string(),
            created_at: "3".to_string(),
            last_status_change_at: "4".to_string(),
            title: "5".to_string(),
            status: "6".to_string(),
            duration: "7".to_string(),
            url: "8".to_string(),
            notes: "9".to_string(),
        };

        assert_eq!(row.fields(), ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }
}
