//! Member model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    column::{columns, Columns, IntoColumns},
    validation::{not_in_future, PHONE_NUMBER},
    Entity,
};

/// Library member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i32,
    pub full_name: String,
    pub joining_date: NaiveDate,
    pub email: String,
    pub phone_number: String,
    /// Whether the member accepts WhatsApp notifications
    pub is_wa_applicable: bool,
}

/// Create member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    #[validate(length(min = 3, max = 250))]
    pub full_name: String,
    #[validate(custom(function = "not_in_future"))]
    pub joining_date: NaiveDate,
    #[validate(email(message = "Invalid email format"), length(max = 50))]
    pub email: String,
    #[validate(
        regex(path = *PHONE_NUMBER, message = "Invalid phone number"),
        length(max = 20)
    )]
    pub phone_number: String,
    #[serde(default)]
    pub is_wa_applicable: bool,
}

/// Update member request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMember {
    #[validate(length(min = 3, max = 250))]
    pub full_name: Option<String>,
    #[validate(email(message = "Invalid email format"), length(max = 50))]
    pub email: Option<String>,
    #[validate(
        regex(path = *PHONE_NUMBER, message = "Invalid phone number"),
        length(max = 20)
    )]
    pub phone_number: Option<String>,
    pub is_wa_applicable: Option<bool>,
}

impl IntoColumns for CreateMember {
    fn into_columns(self) -> Columns {
        columns!(self => full_name, joining_date, email, phone_number, is_wa_applicable;)
    }
}

impl IntoColumns for UpdateMember {
    fn into_columns(self) -> Columns {
        columns!(self => ; full_name, email, phone_number, is_wa_applicable)
    }
}

impl Entity for Member {
    type Create = CreateMember;
    type Update = UpdateMember;

    const TABLE: &'static str = "members";
    const PATH: &'static str = "/members";
    const TAG: &'static str = "members";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use serde_json::json;

    fn member() -> CreateMember {
        serde_json::from_value(json!({
            "full_name": "Ada Lovelace",
            "joining_date": Local::now().date_naive(),
            "email": "ada@example.org",
            "phone_number": "+441234567890"
        }))
        .unwrap()
    }

    #[test]
    fn valid_member_defaults_whatsapp_flag_off() {
        let member = member();
        assert!(member.validate().is_ok());
        assert!(!member.is_wa_applicable);
    }

    #[test]
    fn rejects_future_joining_date() {
        let mut member = member();
        member.joining_date = Local::now().date_naive() + Duration::days(1);
        let errors = member.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("joining_date"));
    }

    #[test]
    fn rejects_bad_contact_details() {
        let mut member = member();
        member.email = "not-an-email".into();
        member.phone_number = "phone".into();
        let errors = member.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone_number"));
    }

    #[test]
    fn phone_number_fits_column() {
        let mut member = member();
        member.phone_number = "+1234567890123456789".into();
        assert_eq!(member.phone_number.len(), 20);
        assert!(member.validate().is_ok());

        member.phone_number = "+12345678901234567890".into();
        let errors = member.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone_number"));

        let patch = UpdateMember {
            phone_number: Some("+12345678901234567890".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn partial_update() {
        let patch: UpdateMember =
            serde_json::from_value(json!({ "is_wa_applicable": true })).unwrap();
        assert!(patch.validate().is_ok());
        let columns = patch.into_columns();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].0, "is_wa_applicable");
    }
}
