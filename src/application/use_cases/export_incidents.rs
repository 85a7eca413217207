//! # Export Incidents Use Case
//!
//! インシデント履歴エクスポートユースケース

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::domain::entities::filter::IncidentFilter;
use crate::domain::repositories::incident_sink::IncidentSink;
use crate::domain::repositories::pagerduty_repository::PagerDutyRepository;
use crate::domain::services::clock::{Clock, SystemClock};
use crate::domain::services::record_transformer::RecordTransformer;

/// エクスポート結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// 書き込んだ行数
    pub rows_written: usize,
}

/// インシデントエクスポートユースケース
///
/// インシデントを1件ずつ取得し、ノートを取得して行に変換し、出力先に書き込む。
/// 継続時間の `now` はインシデントごとに取得する。
pub struct ExportIncidentsUseCase<R: PagerDutyRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: PagerDutyRepository> ExportIncidentsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// インシデントをエクスポート
    ///
    /// # Arguments
    ///
    /// * `filter` - 検索条件
    /// * `sink` - 出力先
    ///
    /// # Errors
    ///
    /// API 呼び出し、タイムスタンプの解析、書き込みのいずれかに失敗した場合
    pub async fn execute(
        &self,
        filter: &IncidentFilter,
        sink: &mut dyn IncidentSink,
    ) -> Result<ExportSummary> {
        debug!("Exporting incidents with filter: {:?}", filter);

        let mut incidents = self.repository.incidents(filter).await?;
        let mut rows_written = 0;

        while let Some(incident) = incidents.fetch_next().await? {
            let duration = RecordTransformer::compute_duration(&incident, self.clock.now())?;
            let notes = self.repository.incident_notes(&incident.id).await?;
            let notes = RecordTransformer::join_notes(notes).await?;

            let row = RecordTransformer::to_row(&incident, duration, notes);
            sink.write_row(&row)?;
            rows_written += 1;
        }

        sink.finish()?;

        info!(
            "Exported {} incidents ({} pages)",
            rows_written,
            incidents.pages_fetched()
        );

        Ok(ExportSummary { rows_written })
    }
}
