//! Single-line renderings for the `teams` and `oncall` commands

use crate::domain::entities::user::{OnCallStatus, Team};

/// `<id> <summary>`
pub fn format_team_line(team: &Team) -> String {
    format!("{} {}", team.id, team.summary)
}

/// `User <id> on call: True|False`
pub fn format_on_call_line(status: &OnCallStatus) -> String {
    let flag = if status.is_on_call() { "True" } else { "False" };
    format!("User {} on call: {}", status.user_id, flag)
}
