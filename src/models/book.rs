//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    column::{columns, Columns, IntoColumns},
    Entity,
};

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
    pub published_month: i32,
    /// Free-text state, e.g. Available, Borrowed, Reserved
    pub status: String,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 3, max = 250, message = "Title of Book must be specified"))]
    pub title: String,
    #[validate(length(min = 3, max = 250, message = "Author of Book must be specified"))]
    pub author: String,
    pub isbn: String,
    #[validate(range(min = 1500, message = "Year must be after 1500"))]
    pub published_year: i32,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub published_month: i32,
    /// Defaults to `Available` when omitted
    #[validate(length(min = 3))]
    pub status: Option<String>,
}

/// Update book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 3, max = 250, message = "Title of Book must be specified"))]
    pub title: Option<String>,
    #[validate(length(min = 3, max = 250, message = "Author of Book must be specified"))]
    pub author: Option<String>,
    #[validate(length(min = 3, max = 20))]
    pub isbn: Option<String>,
    #[validate(range(min = 1500, message = "Year must be after 1500"))]
    pub published_year: Option<i32>,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub published_month: Option<i32>,
    #[validate(length(min = 3))]
    pub status: Option<String>,
}

impl IntoColumns for CreateBook {
    fn into_columns(self) -> Columns {
        columns!(self => title, author, isbn, published_year, published_month; status)
    }
}

impl IntoColumns for UpdateBook {
    fn into_columns(self) -> Columns {
        columns!(self => ; title, author, isbn, published_year, published_month, status)
    }
}

impl Entity for Book {
    type Create = CreateBook;
    type Update = UpdateBook;

    const TABLE: &'static str = "books";
    const PATH: &'static str = "/books";
    const TAG: &'static str = "books";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnValue;
    use serde_json::json;

    fn dune(year: i32) -> CreateBook {
        serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "isbn": "1234567890123",
            "published_year": year,
            "published_month": 6
        }))
        .unwrap()
    }

    #[test]
    fn published_year_lower_bound() {
        let errors = dune(1499).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("published_year"));
        assert!(dune(1500).validate().is_ok());
        assert!(dune(1965).validate().is_ok());
    }

    #[test]
    fn month_and_title_bounds() {
        let mut book = dune(1965);
        book.published_month = 13;
        book.title = "Du".into();
        let errors = book.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("published_month"));
        assert!(fields.contains_key("title"));
    }

    #[test]
    fn omitted_status_is_left_to_storage_default() {
        let columns = dune(1965).into_columns();
        let names: Vec<_> = columns.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["title", "author", "isbn", "published_year", "published_month"]
        );
    }

    #[test]
    fn update_only_sets_supplied_fields() {
        let patch: UpdateBook = serde_json::from_value(json!({ "status": "Borrowed" })).unwrap();
        assert!(patch.validate().is_ok());
        assert_eq!(
            patch.into_columns(),
            vec![("status", ColumnValue::Text(Some("Borrowed".into())))]
        );
    }

    #[test]
    fn update_checks_supplied_fields() {
        let patch: UpdateBook =
            serde_json::from_value(json!({ "published_year": 1200, "isbn": "12" })).unwrap();
        let errors = patch.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("published_year"));
        assert!(fields.contains_key("isbn"));
    }
}
