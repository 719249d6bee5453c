//! Lending model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::{
    column::{columns, Columns, IntoColumns},
    validation::not_in_future,
    Entity,
};

/// A book lent to a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lending {
    pub id: i32,
    pub book_id: i32,
    pub member_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Null while the book is still out
    pub return_date: Option<NaiveDate>,
}

/// Create lending request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLending {
    #[validate(range(min = 1, message = "Book Id for lending"))]
    pub book_id: i32,
    #[validate(range(min = 1, message = "Member Id for lending"))]
    pub member_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    #[validate(custom(function = "not_in_future"))]
    pub return_date: Option<NaiveDate>,
}

/// Update lending request.
///
/// `return_date: null` clears the return date; leaving the key out keeps it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLending {
    pub due_date: Option<NaiveDate>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub return_date: Option<Option<NaiveDate>>,
}

impl Validate for UpdateLending {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(Some(date)) = &self.return_date {
            if let Err(e) = not_in_future(date) {
                errors.add("return_date", e);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl IntoColumns for CreateLending {
    fn into_columns(self) -> Columns {
        columns!(self => book_id, member_id, borrow_date, due_date; return_date)
    }
}

impl IntoColumns for UpdateLending {
    fn into_columns(self) -> Columns {
        columns!(self => ; due_date, return_date)
    }
}

impl Entity for Lending {
    type Create = CreateLending;
    type Update = UpdateLending;

    const TABLE: &'static str = "lendings";
    const PATH: &'static str = "/lendings";
    const TAG: &'static str = "lendings";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnValue;
    use chrono::{Duration, Local};
    use serde_json::json;

    #[test]
    fn rejects_non_positive_references() {
        let lending: CreateLending = serde_json::from_value(json!({
            "book_id": 0,
            "member_id": -4,
            "borrow_date": "2024-03-01",
            "due_date": "2024-03-15"
        }))
        .unwrap();
        let errors = lending.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("book_id"));
        assert!(fields.contains_key("member_id"));
    }

    #[test]
    fn rejects_future_return_date() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let lending: CreateLending = serde_json::from_value(json!({
            "book_id": 1,
            "member_id": 1,
            "borrow_date": "2024-03-01",
            "due_date": "2024-03-15",
            "return_date": tomorrow
        }))
        .unwrap();
        assert!(lending.validate().is_err());

        let patch: UpdateLending = serde_json::from_value(json!({ "return_date": tomorrow })).unwrap();
        let errors = patch.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("return_date"));
    }

    #[test]
    fn null_return_date_differs_from_absent() {
        let cleared: UpdateLending = serde_json::from_value(json!({ "return_date": null })).unwrap();
        assert!(cleared.validate().is_ok());
        assert_eq!(
            cleared.into_columns(),
            vec![("return_date", ColumnValue::Date(None))]
        );

        let untouched: UpdateLending =
            serde_json::from_value(json!({ "due_date": "2024-04-01" })).unwrap();
        assert_eq!(
            untouched.into_columns(),
            vec![(
                "due_date",
                ColumnValue::Date(NaiveDate::from_ymd_opt(2024, 4, 1))
            )]
        );
    }
}
