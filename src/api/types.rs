use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Every record field is optional: `None` means the server did not send it,
// and it is left out again when the record is serialized.

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Incident {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_updates: Option<Vec<IncidentUpdate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_body_last_updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_ignored: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_notified_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_notified_twitter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_published_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_in_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_remind_prior: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_reminded_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_until: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// One entry in an incident's timeline.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct IncidentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Component {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_show_if_degraded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_email: Option<String>,
    /// Calendar date (`YYYY-MM-DD`) the component went live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_from_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_page_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_incident_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_email_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sms_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rss_atom_feeds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_webhook_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_email_footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewers_must_be_team_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Fields accepted when creating or updating an incident.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct UpdateIncidentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Text of the incident update posted alongside the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_notifications: Option<bool>,
    /// Component id to new component status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_ids: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct UpdateComponentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_show_if_degraded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct UpdatePageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_from_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_page_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_incident_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_email_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sms_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rss_atom_feeds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_webhook_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_email_footer: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct IncidentEnvelope<'a> {
    pub incident: &'a UpdateIncidentParams,
}

#[derive(Debug, Serialize)]
pub(crate) struct ComponentEnvelope<'a> {
    pub component: &'a UpdateComponentParams,
}

#[derive(Debug, Serialize)]
pub(crate) struct PageEnvelope<'a> {
    pub page: &'a UpdatePageParams,
}
