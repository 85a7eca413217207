//! # Argument Resolver
//!
//! コマンドライン引数と設定から型付きの設定を作る

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::adapter::config::Settings;
use crate::application::dto::export_request::ExportRequest;
use crate::domain::entities::filter::IncidentFilter;
use crate::domain::services::record_transformer::RecordTransformer;

use super::cli::ExportArgs;

const AWARE_OUTPUT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const NAIVE_OUTPUT: &str = "%Y-%m-%dT%H:%M:%S";

const AWARE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%dT%H:%M:%S%z"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// 入力エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid --{flag} date: '{value}'")]
    InvalidDate { flag: &'static str, value: String },
}

/// トークンを解決（`--token` → `PAGERDUTY_API_TOKEN` → `PAGERDUTY_TOKEN`）
///
/// 未設定でもエラーにしない
pub fn resolve_token(flag: Option<&str>, settings: &Settings) -> Option<String> {
    flag.or_else(|| settings.api_token()).map(str::to_string)
}

/// カンマ・空白区切りの値を分割
pub fn split_tokens(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// 繰り返し指定されたフラグを1つのリストにする
///
/// 順序を保ち、重複は残す
pub fn resolve_repeated(values: &[String]) -> Vec<String> {
    RecordTransformer::flatten_groups(values.iter().map(|value| split_tokens(value)))
}

/// 日付文字列を ISO-8601 に正規化
///
/// # Errors
///
/// どの形式でも解析できない場合は `InputError::InvalidDate`
pub fn normalize_date(flag: &'static str, value: &str) -> Result<String, InputError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.format(AWARE_OUTPUT).to_string());
    }
    for format in AWARE_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Ok(dt.format(AWARE_OUTPUT).to_string());
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.format(NAIVE_OUTPUT).to_string());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(dt.format(NAIVE_OUTPUT).to_string());
            }
        }
    }

    Err(InputError::InvalidDate {
        flag,
        value: value.to_string(),
    })
}

/// エクスポート引数を解決
///
/// # Errors
///
/// `--since` / `--until` が解析できない場合
pub fn resolve_export_request(args: &ExportArgs) -> Result<ExportRequest, InputError> {
    let since = args
        .since
        .as_deref()
        .map(|value| normalize_date("since", value))
        .transpose()?;
    let until = args
        .until
        .as_deref()
        .map(|value| normalize_date("until", value))
        .transpose()?;

    let filter = IncidentFilter {
        since,
        until,
        statuses: resolve_repeated(&args.statuses),
        team_ids: resolve_repeated(&args.teams),
        urgencies: IncidentFilter::effective_urgencies(args.urgency.map(Into::into)),
        time_zone: args.timezone.clone(),
    };

    Ok(ExportRequest::new(
        filter,
        args.outfile.clone(),
        args.format.into(),
    ))
}
