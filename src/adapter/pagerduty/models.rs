//! PagerDuty REST API v2 response models

use serde::Deserialize;

use crate::domain::entities::incident::{Incident, Note, Urgency};
use crate::domain::entities::user::{OnCallEntry, Team, User};

/// `GET /users/me`
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserResource,
}

#[derive(Debug, Deserialize)]
pub struct UserResource {
    pub id: String,
    #[serde(default)]
    pub teams: Vec<TeamReference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamReference {
    pub id: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct UserReference {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct OnCallResource {
    pub user: UserReference,
}

#[derive(Debug, Deserialize)]
pub struct IncidentResource {
    pub id: String,
    pub urgency: Urgency,
    pub created_at: String,
    pub last_status_change_at: String,
    #[serde(default)]
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Deserialize)]
pub struct NoteResource {
    #[serde(default)]
    pub content: String,
}

impl From<TeamReference> for Team {
    fn from(team: TeamReference) -> Self {
        Team {
            id: team.id,
            summary: team.summary,
        }
    }
}

impl From<UserResource> for User {
    fn from(user: UserResource) -> Self {
        User {
            id: user.id,
            teams: user.teams.into_iter().map(Team::from).collect(),
        }
    }
}

impl From<OnCallResource> for OnCallEntry {
    fn from(oncall: OnCallResource) -> Self {
        OnCallEntry {
            user_id: oncall.user.id,
        }
    }
}

impl From<IncidentResource> for Incident {
    fn from(incident: IncidentResource) -> Self {
        Incident {
            id: incident.id,
            urgency: incident.urgency,
            created_at: incident.created_at,
            last_status_change_at: incident.last_status_change_at,
            title: incident.title,
            status: incident.status,
            html_url: incident.html_url,
        }
    }
}

impl From<NoteResource> for Note {
    fn from(note: NoteResource) -> Self {
        Note {
            content: note.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_incident_resource_to_domain() {
        let value = json!({
            "id": "PT4KHLK",
            "type": "incident",
            "summary": "[#1234] The server is on fire.",
            "incident_number": 1234,
            "title": "The server is on fire.",
            "created_at": "2015-10-06T21:30:42Z",
            "last_status_change_at": "2015-10-06T21:38:23Z",
            "status": "resolved",
            "urgency": "high",
            "html_url": "https://subdomain.pagerduty.com/incidents/PT4KHLK"
        });

        let resource: IncidentResource = serde_json::from_value(value).unwrap();
        let incident = Incident::from(resource);

        assert_eq!(incident.id, "PT4KHLK");
        assert_eq!(incident.urgency, Urgency::High);
        assert!(incident.is_resolved());
        assert_eq!(incident.html_url, "https://subdomain.pagerduty.com/incidents/PT4KHLK");
    }

    #[test]
    fn test_incident_unknown_urgency_rejected() {
        let value = json!({
            "id": "P1",
            "created_at": "2015-10-06T21:30:42Z",
            "last_status_change_at": "2015-10-06T21:38:23Z",
            "status": "triggered",
            "urgency": "medium"
        });

        assert!(serde_json::from_value::<IncidentResource>(value).is_err());
    }

    #[test]
    fn test_user_envelope_with_teams() {
        let value = json!({
            "user": {
                "id": "PXPGF42",
                "name": "Earline Greenholt",
                "teams": [
                    {"id": "PQ9K7I8", "type": "team_reference", "summary": "Engineering"}
                ]
            }
        });

        let envelope: UserEnvelope = serde_json::from_value(value).unwrap();
        let user = User::from(envelope.user);

        assert_eq!(user.id, "PXPGF42");
        assert_eq!(
            user.teams,
            vec![Team {
                id: "PQ9K7I8".to_string(),
                summary: "Engineering".to_string()
            }]
        );
    }

    #[test]
    fn test_oncall_resource() {
        let value = json!({
            "escalation_level": 1,
            "user": {"id": "PT23IWX", "type": "user_reference"},
            "start": "2015-03-06T15:28:51-05:00",
            "end": "2015-03-07T15:28:51-05:00"
        });

        let entry = OnCallEntry::from(serde_json::from_value::<OnCallResource>(value).unwrap());
        assert_eq!(entry.user_id, "PT23IWX");
    }
}
