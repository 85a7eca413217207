//! CLI Argument Parsing
//!
//! 3つのコマンドの引数定義

use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

use crate::adapter::config::DEFAULT_ENV_FILE;
use crate::application::dto::export_request::OutputFormat;
use crate::domain::entities::incident::Urgency;

/// 全コマンド共通の引数
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// PagerDuty API (v2) token (falls back to PAGERDUTY_API_TOKEN, then PAGERDUTY_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Environment file read before resolving the token
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    pub env_file: String,
}

/// ユーザーがオンコール中か判定するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "oncall")]
#[command(about = "Determine if a user is on call", long_about = None)]
pub struct OnCallArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// User ID ("me" for the owner of the API token)
    #[arg(value_name = "ID", default_value = "me")]
    pub user_id: String,
}

/// 所属チーム一覧CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "teams")]
#[command(about = "List all the teams to which you belong", long_about = None)]
pub struct TeamsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyArg {
    Low,
    High,
}

impl From<UrgencyArg> for Urgency {
    fn from(value: UrgencyArg) -> Self {
        match value {
            UrgencyArg::Low => Urgency::Low,
            UrgencyArg::High => Urgency::High,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatArg {
    /// Header-less CSV for importing into spreadsheets
    #[default]
    Csv,
    /// Space-separated fields, one incident per line
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

/// インシデント履歴エクスポートCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "export-incidents")]
#[command(about = "Export PagerDuty incident history", long_about = None)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write output to the given file (instead of stdout)
    #[arg(long, value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Start of the date range (default range is one month, maximum six)
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// End of the date range
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,

    /// Only incidents with this status (repeatable, comma separated)
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,

    /// PagerDuty team ID (repeatable, comma separated)
    #[arg(long = "team", value_name = "ID")]
    pub teams: Vec<String>,

    /// Time zone used to render results
    #[arg(long, value_name = "TZ")]
    pub timezone: Option<String>,

    /// Show only incidents of a particular urgency
    #[arg(long, value_enum)]
    pub urgency: Option<UrgencyArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,
}
