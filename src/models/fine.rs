//! Fine model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    column::{columns, Columns, IntoColumns},
    validation::not_in_future,
    Entity,
};

/// Fine charged on a lending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fine {
    pub id: i32,
    pub lending_id: i32,
    pub fine_amount: f64,
    pub fine_date: NaiveDate,
    /// Unpaid or Paid
    pub fine_status: String,
}

/// Create fine request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFine {
    #[validate(range(min = 1, message = "Lending Id for fine"))]
    pub lending_id: i32,
    // Storage accepts zero; the API requires a positive amount.
    #[validate(range(exclusive_min = 0.0, message = "Fine Amount Required"))]
    pub fine_amount: f64,
    #[validate(custom(function = "not_in_future"))]
    pub fine_date: NaiveDate,
    /// Defaults to `Unpaid` when omitted
    #[validate(length(min = 3))]
    pub fine_status: Option<String>,
}

/// Update fine request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFine {
    #[validate(range(exclusive_min = 0.0))]
    pub fine_amount: Option<f64>,
    #[validate(length(min = 3))]
    pub fine_status: Option<String>,
}

impl IntoColumns for CreateFine {
    fn into_columns(self) -> Columns {
        columns!(self => lending_id, fine_amount, fine_date; fine_status)
    }
}

impl IntoColumns for UpdateFine {
    fn into_columns(self) -> Columns {
        columns!(self => ; fine_amount, fine_status)
    }
}

impl Entity for Fine {
    type Create = CreateFine;
    type Update = UpdateFine;

    const TABLE: &'static str = "fines";
    const PATH: &'static str = "/fines";
    const TAG: &'static str = "fines";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fine(amount: f64) -> CreateFine {
        serde_json::from_value(json!({
            "lending_id": 3,
            "fine_amount": amount,
            "fine_date": "2024-05-02"
        }))
        .unwrap()
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(fine(0.0).validate().is_err());
        assert!(fine(-1.5).validate().is_err());
        assert!(fine(0.5).validate().is_ok());
    }

    #[test]
    fn status_short_values_rejected() {
        let patch: UpdateFine = serde_json::from_value(json!({ "fine_status": "ok" })).unwrap();
        assert!(patch.validate().is_err());

        let patch: UpdateFine = serde_json::from_value(json!({ "fine_status": "Paid" })).unwrap();
        assert!(patch.validate().is_ok());
        assert_eq!(patch.into_columns().len(), 1);
    }
}
