//! # Export Request DTO
//!
//! インシデントエクスポートの解決済み設定

use std::path::PathBuf;

use crate::domain::entities::filter::IncidentFilter;

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// ヘッダーなしCSV
    #[default]
    Csv,
    /// スペース区切りの1行
    Plain,
}

/// エクスポート設定
///
/// 引数解決後の不変な設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub filter: IncidentFilter,
    /// `None` なら標準出力
    pub outfile: Option<PathBuf>,
    pub format: OutputFormat,
}

impl ExportRequest {
    pub fn new(filter: IncidentFilter, outfile: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            filter,
            outfile,
            format,
        }
    }
}
