//! # User / Team / OnCall Entities
//!
//! ユーザー、チーム、オンコールのドメインエンティティ

use serde::{Deserialize, Serialize};

/// チーム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub summary: String,
}

/// ユーザー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub teams: Vec<Team>,
}

/// オンコールエントリ
///
/// 1件以上存在すればそのユーザーはオンコール中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnCallEntry {
    pub user_id: String,
}

/// ユーザーID指定
///
/// `me` はAPIトークンの所有者を表す
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSelector {
    CurrentUser,
    Id(String),
}

impl UserSelector {
    pub const ME: &'static str = "me";

    pub fn parse(value: &str) -> Self {
        if value == Self::ME {
            UserSelector::CurrentUser
        } else {
            UserSelector::Id(value.to_string())
        }
    }
}

/// オンコール判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnCallStatus {
    pub user_id: String,
    pub on_call_count: usize,
}

impl OnCallStatus {
    pub fn is_on_call(&self) -> bool {
        self.on_call_count > 0
    }
}
