//! Data models for the library: one module per entity, each with its
//! Read, Create and Update shapes.

pub mod book;
pub mod column;
pub mod fine;
pub mod lending;
pub mod member;
pub mod notification;
pub mod reservation;
pub mod validation;

use serde::{de::DeserializeOwned, Serialize};
use sqlx::{postgres::PgRow, FromRow};
use utoipa::ToSchema;
use validator::Validate;

pub use book::{Book, CreateBook, UpdateBook};
pub use column::{ColumnValue, Columns, IntoColumns};
pub use fine::{CreateFine, Fine, UpdateFine};
pub use lending::{CreateLending, Lending, UpdateLending};
pub use member::{CreateMember, Member, UpdateMember};
pub use notification::{CreateNotification, Notification, UpdateNotification};
pub use reservation::{CreateReservation, Reservation, UpdateReservation};

/// A persisted record type together with its request shapes.
///
/// `Self` is the Read shape: it is decoded straight from a table row and
/// serialized as the response body. `Create` and `Update` are validated
/// before anything touches storage and then turned into the columns they set.
pub trait Entity:
    for<'r> FromRow<'r, PgRow> + Serialize + ToSchema<'static> + Send + Sync + Unpin + 'static
{
    type Create: DeserializeOwned + Validate + IntoColumns + ToSchema<'static> + Send + 'static;
    type Update: DeserializeOwned + Validate + IntoColumns + ToSchema<'static> + Send + 'static;

    /// Table name
    const TABLE: &'static str;
    /// URL prefix of the resource, e.g. `/books`
    const PATH: &'static str;
    /// OpenAPI tag
    const TAG: &'static str;

    fn id(&self) -> i32;
}
