//! # Settings
//!
//! dotfile とプロセス環境変数から不変な設定を作る。
//! プロセス環境は変更しない。

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::Path;

/// デフォルトの dotfile パス
pub const DEFAULT_ENV_FILE: &str = "~/.pincidents";

/// APIトークン（優先）
pub const ENV_API_TOKEN: &str = "PAGERDUTY_API_TOKEN";
/// APIトークン（レガシー）
pub const ENV_LEGACY_TOKEN: &str = "PAGERDUTY_TOKEN";
/// API ベースURL
pub const ENV_API_URL: &str = "PAGERDUTY_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.pagerduty.com";

/// Expands tilde in path and returns the full path
pub fn expand_env_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// 設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// dotfile とプロセス環境変数から読み込む
    ///
    /// dotfile が存在しない場合は環境変数のみ
    ///
    /// # Errors
    ///
    /// dotfile が読めない、または書式が不正な場合
    pub fn load(env_file: &str) -> Result<Self> {
        let expanded = expand_env_path(env_file);
        let dotfile = read_dotfile(Path::new(&expanded))?;
        Ok(Self::from_sources(dotfile, process_env()))
    }

    /// dotfile の値にプロセス環境の値を上書きして作る
    ///
    /// 既に設定されている環境変数は dotfile で上書きされない
    pub fn from_sources(
        dotfile: impl IntoIterator<Item = (String, String)>,
        process: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut values: HashMap<String, String> = dotfile.into_iter().collect();
        values.extend(process);
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 環境由来のAPIトークン（`PAGERDUTY_API_TOKEN` → `PAGERDUTY_TOKEN`）
    pub fn api_token(&self) -> Option<&str> {
        self.get(ENV_API_TOKEN).or_else(|| self.get(ENV_LEGACY_TOKEN))
    }

    pub fn api_url(&self) -> &str {
        self.get(ENV_API_URL).unwrap_or(DEFAULT_API_URL)
    }
}

/// UTF-8 として読めるプロセス環境変数のみ
fn process_env() -> impl Iterator<Item = (String, String)> {
    utf8_pairs(std::env::vars_os())
}

fn utf8_pairs(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> impl Iterator<Item = (String, String)> {
    vars.into_iter().filter_map(|(key, value)| {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                debug!("Skipping non UTF-8 environment variable {:?}", key.ok());
                None
            }
        }
    })
}

fn read_dotfile(path: &Path) -> Result<Vec<(String, String)>> {
    if !path.exists() {
        debug!("No env file at {}, using process environment only", path.display());
        return Ok(Vec::new());
    }

    let entries = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read env file: {}", path.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse env file: {}", path.display()))?;

    info!("Loaded {} entries from {}", entries.len(), path.display());

    Ok(entries)
}
