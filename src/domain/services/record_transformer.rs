//! # Record Transformer
//!
//! インシデントをエクスポート行に変換するドメインサービス

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::domain::entities::incident::{Incident, IncidentRow, Note};
use crate::domain::errors::ApiError;
use crate::domain::repositories::paginated::Paginated;

const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_DAY: i128 = 86_400 * MICROS_PER_SECOND;

/// インシデント変換サービス
pub struct RecordTransformer;

impl RecordTransformer {
    /// インシデントの継続時間を計算
    ///
    /// 解決済みなら `last_status_change_at - created_at`、
    /// それ以外は `now - created_at`
    ///
    /// # Errors
    ///
    /// タイムスタンプが解析できない場合は `ApiError::Malformed`
    pub fn compute_duration(incident: &Incident, now: DateTime<Utc>) -> Result<TimeDelta, ApiError> {
        let started = parse_timestamp(&incident.created_at)?;
        let last_update = if incident.is_resolved() {
            parse_timestamp(&incident.last_status_change_at)?
        } else {
            now
        };
        Ok(last_update - started)
    }

    /// ノートを取得して各内容の後ろに改行を付けて連結
    pub async fn join_notes(mut notes: Paginated<Note>) -> Result<String, ApiError> {
        let mut joined = String::new();
        while let Some(note) = notes.fetch_next().await? {
            joined.push_str(&note.content);
            joined.push('\n');
        }
        Ok(joined)
    }

    /// ネストしたグループを順序を保って平坦化（重複は残す）
    pub fn flatten_groups<T, G>(groups: impl IntoIterator<Item = G>) -> Vec<T>
    where
        G: IntoIterator<Item = T>,
    {
        groups.into_iter().flatten().collect()
    }

    /// エクスポート行を作成
    pub fn to_row(incident: &Incident, duration: TimeDelta, notes: String) -> IncidentRow {
        IncidentRow {
            id: incident.id.clone(),
            urgency: incident.urgency.to_string(),
            created_at: incident.created_at.clone(),
            last_status_change_at: incident.last_status_change_at.clone(),
            title: incident.title.clone(),
            status: incident.status.clone(),
            duration: format_duration(duration),
            url: incident.html_url.clone(),
            notes,
        }
    }
}

/// タイムスタンプを解析（オフセットなしは UTC とみなす）
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| ApiError::Malformed(format!("invalid timestamp '{}': {}", value, e)))
}

/// 継続時間を `[N day(s), ]H:MM:SS[.ffffff]` 形式にする
///
/// 負の値は日数側に負の値を持たせ、時刻部分は常に非負
pub fn format_duration(duration: TimeDelta) -> String {
    let total = i128::from(duration.num_seconds()) * MICROS_PER_SECOND
        + i128::from(duration.subsec_nanos() / 1_000);

    let days = total.div_euclid(MICROS_PER_DAY);
    let rem = total.rem_euclid(MICROS_PER_DAY);
    let seconds = rem / MICROS_PER_SECOND;
    let micros = rem % MICROS_PER_SECOND;

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() == 1 { "" } else { "s" };
        out.push_str(&format!("{} day{}, ", days, plural));
    }
    out.push_str(&format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    ));
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::incident::Urgency;
    use chrono::TimeZone;

    fn create_test_incident(status: &str) -> Incident {
        Incident {
            id: "PINC001".to_string(),
            urgency: Urgency::Low,
            created_at: "2024-12-25T10:00:00Z".to_string(),
            last_status_change_at: "2024-12-25T12:30:00Z".to_string(),
            title: "Disk full".to_string(),
            status: status.to_string(),
            html_url: "https://example.pagerduty.com/incidents/PINC001".to_string(),
        }
    }

    #[test]
    fn test_duration_resolved_ignores_now() {
        let incident = create_test_incident("resolved");
        let early = Utc.with_ymd_and_hms(2024, 12, 26, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let a = RecordTransformer::compute_duration(&incident, early).unwrap();
        let b = RecordTransformer::compute_duration(&incident, late).unwrap();

        assert_eq!(a, TimeDelta::minutes(150));
        assert_eq!(a, b);
    }

    #[test]
    fn test_duration_open_uses_now() {
        let incident = create_test_incident("acknowledged");
        let now = Utc.with_ymd_and_hms(2024, 12, 26, 10, 0, 0).unwrap();

        let duration = RecordTransformer::compute_duration(&incident, now).unwrap();

        assert_eq!(duration, TimeDelta::days(1));
    }

    #[test]
    fn test_duration_open_is_monotonic() {
        let incident = create_test_incident("triggered");
        let base = Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap();

        let mut previous = RecordTransformer::compute_duration(&incident, base).unwrap();
        for step in [1, 60, 3600, 86_400, 86_401] {
            let now = base + TimeDelta::seconds(step);
            let current = RecordTransformer::compute_duration(&incident, now).unwrap();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_duration_invalid_timestamp() {
        let mut incident = create_test_incident("resolved");
        incident.last_status_change_at = "yesterday".to_string();

        let result = RecordTransformer::compute_duration(&incident, Utc::now());

        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let parsed = parse_timestamp("2024-12-25T19:00:00+09:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_naive_is_utc() {
        let parsed = parse_timestamp("2024-12-25T10:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::zero()), "0:00:00");
        assert_eq!(format_duration(TimeDelta::seconds(3725)), "1:02:05");
        assert_eq!(format_duration(TimeDelta::days(1)), "1 day, 0:00:00");
        assert_eq!(
            format_duration(TimeDelta::days(3) + TimeDelta::hours(4)),
            "3 days, 4:00:00"
        );
        assert_eq!(
            format_duration(TimeDelta::seconds(1) + TimeDelta::microseconds(500_000)),
            "0:00:01.500000"
        );
    }

    #[test]
    fn test_format_negative_duration() {
        assert_eq!(format_duration(TimeDelta::seconds(-1)), "-1 day, 23:59:59");
        assert_eq!(format_duration(TimeDelta::days(-2)), "-2 days, 0:00:00");
    }

    #[tokio::test]
    async fn test_join_notes() {
        let notes = Paginated::from_vec(vec![Note::new("first"), Note::new("second")]);
        assert_eq!(
            RecordTransformer::join_notes(notes).await.unwrap(),
            "first\nsecond\n"
        );
    }

    #[tokio::test]
    async fn test_join_notes_empty() {
        let notes: Paginated<Note> = Paginated::from_vec(vec![]);
        assert_eq!(RecordTransformer::join_notes(notes).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_join_notes_keeps_empty_content() {
        let notes = Paginated::from_vec(vec![Note::new("a"), Note::new(""), Note::new("c")]);
        assert_eq!(RecordTransformer::join_notes(notes).await.unwrap(), "a\n\nc\n");
    }

    #[test]
    fn test_flatten_groups_preserves_order_and_duplicates() {
        let flat = RecordTransformer::flatten_groups(vec![vec!["a", "b"], vec![], vec!["a"]]);
        assert_eq!(flat, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_flatten_groups_associative() {
        let left = RecordTransformer::flatten_groups(vec![
            RecordTransformer::flatten_groups(vec![vec!['a', 'b'], vec!['c']]),
            RecordTransformer::flatten_groups(vec![vec!['d']]),
        ]);
        let whole = RecordTransformer::flatten_groups(vec![vec!['a', 'b'], vec!['c'], vec!['d']]);
        assert_eq!(left, whole);
    }

    #[test]
    fn test_to_row() {
        let incident = create_test_incident("resolved");
        let row = RecordTransformer::to_row(&incident, TimeDelta::minutes(150), "note\n".to_string());

        assert_eq!(
            row.fields(),
            [
                "PINC001",
                "low",
                "2024-12-25T10:00:00Z",
                "2024-12-25T12:30:00Z",
                "Disk full",
                "resolved",
                "2:30:00",
                "https://example.pagerduty.com/incidents/PINC001",
                "note\n",
            ]
        );
    }
}
