//! Reservation model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    column::{columns, Columns, IntoColumns},
    validation::not_in_past,
    Entity,
};

/// Book reservation held for a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub member_id: i32,
    pub book_id: i32,
    pub reservation_date: NaiveDate,
    pub reservation_status: String,
}

/// Create reservation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservation {
    #[validate(range(min = 1, message = "Member Id for Reservation"))]
    pub member_id: i32,
    #[validate(range(min = 1, message = "Book Id for Reservation"))]
    pub book_id: i32,
    /// Defaults to today when omitted
    #[validate(custom(function = "not_in_past"))]
    pub reservation_date: Option<NaiveDate>,
    /// Defaults to `Pending` when omitted
    #[validate(length(min = 3))]
    pub reservation_status: Option<String>,
}

/// Update reservation request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReservation {
    #[validate(length(min = 3))]
    pub reservation_status: Option<String>,
}

impl IntoColumns for CreateReservation {
    fn into_columns(self) -> Columns {
        columns!(self => member_id, book_id; reservation_date, reservation_status)
    }
}

impl IntoColumns for UpdateReservation {
    fn into_columns(self) -> Columns {
        columns!(self => ; reservation_status)
    }
}

impl Entity for Reservation {
    type Create = CreateReservation;
    type Update = UpdateReservation;

    const TABLE: &'static str = "reservations";
    const PATH: &'static str = "/reservations";
    const TAG: &'static str = "reservations";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use serde_json::json;

    #[test]
    fn reservation_date_cannot_be_in_the_past() {
        let yesterday = Local::now().date_naive() - Duration::days(1);
        let reservation: CreateReservation = serde_json::from_value(json!({
            "member_id": 1,
            "book_id": 2,
            "reservation_date": yesterday
        }))
        .unwrap();
        let errors = reservation.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("reservation_date"));
    }

    #[test]
    fn omitted_fields_use_storage_defaults() {
        let reservation: CreateReservation =
            serde_json::from_value(json!({ "member_id": 1, "book_id": 2 })).unwrap();
        assert!(reservation.validate().is_ok());
        let names: Vec<_> = reservation
            .into_columns()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["member_id", "book_id"]);
    }
}
