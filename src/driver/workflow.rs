//! Workflow Orchestration
//!
//! 3つのコマンドのオーケストレーションと依存性注入

use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use crate::adapter::config::Settings;
use crate::adapter::output::lines::{format_on_call_line, format_team_line};
use crate::adapter::output::IncidentWriter;
use crate::adapter::pagerduty::PagerDutyClient;
use crate::application::dto::export_request::ExportRequest;
use crate::application::use_cases::check_oncall::CheckOnCallUseCase;
use crate::application::use_cases::export_incidents::ExportIncidentsUseCase;
use crate::application::use_cases::list_teams::ListTeamsUseCase;
use crate::domain::entities::user::UserSelector;
use crate::domain::repositories::pagerduty_repository::PagerDutyRepository;
use crate::domain::services::clock::{Clock, SystemClock};

use super::cli::{CommonArgs, ExportArgs, OnCallArgs, TeamsArgs};
use super::exit::ExitStatus;
use super::resolver::{resolve_export_request, resolve_token};

/// PagerDuty Workflow
pub struct PagerDutyWorkflow<R: PagerDutyRepository> {
    check_oncall: CheckOnCallUseCase<R>,
    list_teams: ListTeamsUseCase<R>,
    export_incidents: ExportIncidentsUseCase<R>,
}

impl<R: PagerDutyRepository> PagerDutyWorkflow<R> {
    /// Create a new workflow instance with dependency injection
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            check_oncall: CheckOnCallUseCase::new(repository.clone()),
            list_teams: ListTeamsUseCase::new(repository.clone()),
            export_incidents: ExportIncidentsUseCase::with_clock(repository, clock),
        }
    }

    /// `oncall`: 判定結果を1行出力
    pub async fn oncall(&self, selector: &UserSelector, out: &mut dyn Write) -> Result<ExitStatus> {
        let status = self.check_oncall.execute(selector).await?;
        writeln!(out, "{}", format_on_call_line(&status))?;
        Ok(ExitStatus::from_on_call(&status))
    }

    /// `teams`: 1チーム1行
    pub async fn teams(&self, out: &mut dyn Write) -> Result<ExitStatus> {
        for team in self.list_teams.execute().await? {
            writeln!(out, "{}", format_team_line(&team))?;
        }
        Ok(ExitStatus::Success)
    }

    /// `export-incidents`: ファイルまたは `stdout` に書き込む
    ///
    /// 出力ファイルは API 呼び出しの前に作成（切り詰め）する。
    /// 失敗時も writer の drop でバッファはフラッシュされる。
    pub async fn export(&self, request: &ExportRequest, stdout: &mut dyn Write) -> Result<ExitStatus> {
        let summary = match &request.outfile {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let mut writer = IncidentWriter::new(BufWriter::new(file), request.format);
                self.export_incidents
                    .execute(&request.filter, &mut writer)
                    .await?
            }
            None => {
                let mut writer = IncidentWriter::new(stdout, request.format);
                self.export_incidents
                    .execute(&request.filter, &mut writer)
                    .await?
            }
        };

        info!("Wrote {} incident rows", summary.rows_written);

        Ok(ExitStatus::Success)
    }
}

/// 設定を読み込み HTTP クライアントで workflow を組み立てる
pub fn connect(common: &CommonArgs) -> Result<PagerDutyWorkflow<PagerDutyClient>> {
    let settings = Settings::load(&common.env_file)?;
    let token = resolve_token(common.token.as_deref(), &settings);
    if token.is_none() {
        info!("No API token configured; the request will be rejected by PagerDuty");
    }

    let client = PagerDutyClient::new(token.as_deref(), settings.api_url())?;
    Ok(PagerDutyWorkflow::new(Arc::new(client)))
}

pub async fn run_oncall(args: OnCallArgs) -> Result<ExitStatus> {
    let workflow = connect(&args.common)?;
    let selector = UserSelector::parse(&args.user_id);
    workflow.oncall(&selector, &mut io::stdout()).await
}

pub async fn run_teams(args: TeamsArgs) -> Result<ExitStatus> {
    let workflow = connect(&args.common)?;
    workflow.teams(&mut io::stdout()).await
}

pub async fn run_export(args: ExportArgs) -> Result<ExitStatus> {
    let request = resolve_export_request(&args)?;
    let workflow = connect(&args.common)?;
    workflow.export(&request, &mut io::stdout()).await
}
