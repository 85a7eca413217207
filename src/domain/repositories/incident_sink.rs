//! # Incident Sink Trait
//!
//! エクスポート行の出力先を抽象化

use anyhow::Result;

use crate::domain::entities::incident::IncidentRow;

/// エクスポート行の出力先
pub trait IncidentSink {
    /// 1行書き込む
    fn write_row(&mut self, row: &IncidentRow) -> Result<()>;

    /// バッファをフラッシュする
    fn finish(&mut self) -> Result<()>;
}

impl IncidentSink for Vec<IncidentRow> {
    fn write_row(&mut self, row: &IncidentRow) -> Result<()> {
        self.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
