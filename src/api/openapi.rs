//! OpenAPI documentation
//!
//! Static endpoints are described with `#[utoipa::path]`. The CRUD handlers
//! are generic, so their path items are built per registered entity.

use utoipa::{
    openapi::{
        path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemType},
        request_body::RequestBodyBuilder,
        tag::TagBuilder,
        ArrayBuilder, Components, ContentBuilder, KnownFormat, ObjectBuilder, Ref, RefOr, Required,
        ResponseBuilder, Schema, SchemaFormat, SchemaType,
    },
    IntoParams, OpenApi, ToSchema,
};

use super::{health, resource};
use crate::models::Entity;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Management System",
        version = "1.0.0",
        description = "CRUD REST API for books, members, lendings, fines, reservations and notifications"
    ),
    paths(health::health_check, health::readiness_check),
    components(
        schemas(
            health::HealthResponse,
            resource::DeleteResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> RefOr<utoipa::openapi::Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content("application/json", ContentBuilder::new().schema(schema).build())
            .build(),
    )
}

fn id_parameter() -> utoipa::openapi::path::Parameter {
    let integer = ObjectBuilder::new()
        .schema_type(SchemaType::Integer)
        .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32)))
        .build();
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Record ID"))
        .schema(Some(RefOr::T(Schema::Object(integer))))
        .build()
}

fn name_of<T: ToSchema<'static>>() -> &'static str {
    T::schema().0
}

/// Add the schemas, tag and path items of `E` to `doc`
pub fn document<E: Entity>(doc: &mut utoipa::openapi::OpenApi) {
    let read = name_of::<E>();
    let create = name_of::<E::Create>();
    let update = name_of::<E::Update>();

    let components = doc.components.get_or_insert_with(Components::new);
    for (name, schema) in [
        <E as ToSchema<'static>>::schema(),
        <E::Create as ToSchema<'static>>::schema(),
        <E::Update as ToSchema<'static>>::schema(),
    ] {
        components.schemas.insert(name.to_string(), schema);
    }

    doc.tags
        .get_or_insert_with(Vec::new)
        .push(TagBuilder::new().name(E::TAG).build());

    let error = || schema_ref("ErrorResponse");
    let body = |name: &str| {
        RequestBodyBuilder::new()
            .content("application/json", ContentBuilder::new().schema(schema_ref(name)).build())
            .required(Some(Required::True))
            .build()
    };

    let list = resource::Pagination::into_params(|| Some(ParameterIn::Query))
        .into_iter()
        .fold(OperationBuilder::new(), |op, param| op.parameter(param))
        .tag(E::TAG)
        .summary(Some(format!("List {}", E::TAG)))
        .operation_id(Some(format!("list_{}", E::TAG)))
        .response(
            "200",
            json_response(
                "Records in id order",
                RefOr::T(Schema::Array(ArrayBuilder::new().items(schema_ref(read)).build())),
            ),
        )
        .response("422", json_response("Invalid pagination", error()))
        .build();

    let create_op = OperationBuilder::new()
        .tag(E::TAG)
        .summary(Some(format!("Create {}", read)))
        .operation_id(Some(format!("create_{}", E::TAG)))
        .request_body(Some(body(create)))
        .response("200", json_response("Created record", schema_ref(read)))
        .response("422", json_response("Validation failed", error()))
        .build();

    let mut collection = PathItem::new(PathItemType::Get, list);
    collection.operations.insert(PathItemType::Post, create_op);

    let get_op = OperationBuilder::new()
        .tag(E::TAG)
        .summary(Some(format!("Get {} by ID", read)))
        .operation_id(Some(format!("get_{}", E::TAG)))
        .parameter(id_parameter())
        .response("200", json_response("Record", schema_ref(read)))
        .response("404", json_response("Item not found", error()))
        .build();

    let update_op = OperationBuilder::new()
        .tag(E::TAG)
        .summary(Some(format!("Update {}", read)))
        .operation_id(Some(format!("update_{}", E::TAG)))
        .parameter(id_parameter())
        .request_body(Some(body(update)))
        .response("200", json_response("Updated record", schema_ref(read)))
        .response("404", json_response("Item not found", error()))
        .response("422", json_response("Validation failed", error()))
        .build();

    let delete_op = OperationBuilder::new()
        .tag(E::TAG)
        .summary(Some(format!("Delete {}", read)))
        .operation_id(Some(format!("delete_{}", E::TAG)))
        .parameter(id_parameter())
        .response("200", json_response("Record deleted", schema_ref("DeleteResponse")))
        .response("404", json_response("Item not found", error()))
        .build();

    let mut item = PathItem::new(PathItemType::Get, get_op);
    item.operations.insert(PathItemType::Put, update_op);
    item.operations.insert(PathItemType::Delete, delete_op);

    doc.paths.paths.insert(format!("{}/", E::PATH), collection);
    doc.paths.paths.insert(format!("{}/{{id}}", E::PATH), item);
}
