//! Presence-aware column mapping between request shapes and SQL

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{postgres::PgArguments, query::QueryAs, Postgres};

/// A single typed value bound to a statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(Option<String>),
    Int(Option<i32>),
    Float(Option<f64>),
    Bool(Option<bool>),
    Date(Option<NaiveDate>),
    Timestamp(Option<NaiveDateTime>),
}

macro_rules! column_value_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for ColumnValue {
            fn from(value: $ty) -> Self {
                ColumnValue::$variant(Some(value))
            }
        }

        impl From<Option<$ty>> for ColumnValue {
            fn from(value: Option<$ty>) -> Self {
                ColumnValue::$variant(value)
            }
        }
    };
}

column_value_from!(String, Text);
column_value_from!(i32, Int);
column_value_from!(f64, Float);
column_value_from!(bool, Bool);
column_value_from!(NaiveDate, Date);
column_value_from!(NaiveDateTime, Timestamp);

impl ColumnValue {
    pub fn bind<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            ColumnValue::Text(v) => query.bind(v),
            ColumnValue::Int(v) => query.bind(v),
            ColumnValue::Float(v) => query.bind(v),
            ColumnValue::Bool(v) => query.bind(v),
            ColumnValue::Date(v) => query.bind(v),
            ColumnValue::Timestamp(v) => query.bind(v),
        }
    }
}

/// Ordered `(column, value)` pairs; absent keys are simply not listed
pub type Columns = Vec<(&'static str, ColumnValue)>;

/// Conversion of a validated request shape into the columns it sets
pub trait IntoColumns {
    fn into_columns(self) -> Columns;
}

/// Builds [`Columns`] from a shape.
///
/// Fields listed before `;` are always written. Fields after it are `Option`s
/// and only written when present, so storage defaults (on create) or prior
/// values (on update) are kept. A double option (`Option<Option<T>>`) in the
/// second group writes `NULL` for an explicit null.
macro_rules! columns {
    ($shape:expr => $($required:ident),* ; $($optional:ident),* $(,)?) => {{
        let shape = $shape;
        #[allow(unused_mut)]
        let mut columns: $crate::models::column::Columns = vec![
            $( (stringify!($required), $crate::models::column::ColumnValue::from(shape.$required)), )*
        ];
        $(
            if let Some(value) = shape.$optional {
                columns.push((stringify!($optional), $crate::models::column::ColumnValue::from(value)));
            }
        )*
        columns
    }};
}

pub(crate) use columns;

#[cfg(test)]
mod tests {
    use super::*;

    struct Patch {
        name: Option<String>,
        count: Option<i32>,
        returned: Option<Option<NaiveDate>>,
    }

    impl IntoColumns for Patch {
        fn into_columns(self) -> Columns {
            columns!(self => ; name, count, returned)
        }
    }

    #[test]
    fn absent_fields_are_skipped() {
        let columns = Patch {
            name: Some("Dune".into()),
            count: None,
            returned: None,
        }
        .into_columns();

        assert_eq!(columns, vec![("name", ColumnValue::Text(Some("Dune".into())))]);
    }

    #[test]
    fn explicit_null_is_kept() {
        let columns = Patch {
            name: None,
            count: None,
            returned: Some(None),
        }
        .into_columns();

        assert_eq!(columns, vec![("returned", ColumnValue::Date(None))]);
    }

    #[test]
    fn empty_patch_has_no_columns() {
        let columns = Patch {
            name: None,
            count: None,
            returned: None,
        }
        .into_columns();

        assert!(columns.is_empty());
    }
}
