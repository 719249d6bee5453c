//! Notification model

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    column::{columns, Columns, IntoColumns},
    validation::datetime_not_in_past,
    Entity,
};

/// Message scheduled for a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: i32,
    pub notification_date: NaiveDateTime,
    pub member_id: i32,
    /// sms, email or WhatsApp
    pub notification_type: String,
    pub notification_message: String,
}

/// Accepts RFC 3339 timestamps with an offset (converted to local time) as
/// well as naive ones (taken as local time already).
fn local_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Zoned(DateTime<FixedOffset>),
        Naive(NaiveDateTime),
    }

    Ok(match Timestamp::deserialize(deserializer)? {
        Timestamp::Zoned(value) => value.with_timezone(&Local).naive_local(),
        Timestamp::Naive(value) => value,
    })
}

fn default_notification_type() -> String {
    "email".to_string()
}

/// Create notification request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotification {
    #[serde(deserialize_with = "local_datetime")]
    #[validate(custom(function = "datetime_not_in_past"))]
    pub notification_date: NaiveDateTime,
    #[validate(range(min = 1, message = "Member Id for Notification"))]
    pub member_id: i32,
    #[serde(default = "default_notification_type")]
    #[validate(length(min = 1, max = 50))]
    pub notification_type: String,
    #[validate(length(min = 1, max = 1000))]
    pub notification_message: String,
}

/// Update notification request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateNotification {
    #[validate(length(min = 1, max = 1000))]
    pub notification_message: Option<String>,
}

impl IntoColumns for CreateNotification {
    fn into_columns(self) -> Columns {
        columns!(self => notification_date, member_id, notification_type, notification_message;)
    }
}

impl IntoColumns for UpdateNotification {
    fn into_columns(self) -> Columns {
        columns!(self => ; notification_message)
    }
}

impl Entity for Notification {
    type Create = CreateNotification;
    type Update = UpdateNotification;

    const TABLE: &'static str = "notifications";
    const PATH: &'static str = "/notifications";
    const TAG: &'static str = "notifications";

    fn id(&self) -> i32 {
        self.id
    }
}
