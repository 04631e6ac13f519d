//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the response and error schemas they reference. The generated document
//! backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::user_posts::{PostResponse, UserInfoResponse, UserPostsResponse};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User posts backend API",
        description = "Aggregates an upstream user's profile and posts into one document."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::user_posts::get_user_posts,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserPostsResponse,
        UserInfoResponse,
        PostResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "user-posts", description = "Aggregated user profile and posts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    fn schema(name: &str) -> RefOr<Schema> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        schemas
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("{name} schema registered; have {:?}", schemas.keys()))
    }

    #[test]
    fn user_posts_schema_uses_wire_field_names() {
        let response = schema("UserPostsResponse");
        for field in ["id", "userInfo", "posts"] {
            assert_object_schema_has_field(&response, field);
        }
    }

    #[test]
    fn post_and_user_info_schemas_have_required_fields() {
        let post = schema("PostResponse");
        for field in ["id", "title", "body"] {
            assert_object_schema_has_field(&post, field);
        }
        let user = schema("UserInfoResponse");
        for field in ["name", "username", "email"] {
            assert_object_schema_has_field(&user, field);
        }
    }

    #[test]
    fn error_schema_has_required_fields() {
        let error = schema("Error");
        assert_object_schema_has_field(&error, "code");
        assert_object_schema_has_field(&error, "message");
        assert_object_schema_has_field(&error, "traceId");
    }

    #[test]
    fn user_posts_path_is_documented() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/v1/user-posts/{user_id}")
            .expect("user posts path");
        let operation = item.get.as_ref().expect("GET operation");
        assert_eq!(operation.operation_id.as_deref(), Some("getUserPosts"));
        for status in ["200", "400", "404", "500"] {
            assert!(
                operation.responses.responses.contains_key(status),
                "missing {status} response"
            );
        }
    }
}
