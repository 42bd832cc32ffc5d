use crate::maud_conveniences::{page, render_table};
use axum::Json;
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};
use std::sync::LazyLock;

const SWAGGER_UI_VERSION: &str = "5.17.14";
const SWAGGER_UI_INIT: &str = r##"window.onload = () => {
    window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
};"##;

pub fn openapi_document() -> &'static Value {
    static DOCUMENT: LazyLock<Value> = LazyLock::new(|| {
        let id_parameter = json!({
            "in": "path",
            "name": "id",
            "required": true,
            "schema": {"type": "string"},
        });
        let student_example = json!({"id": 1, "name": "Alice", "age": 20});

        json!({
            "openapi": "3.0.0",
            "info": {
                "title": "Student CRUD API",
                "version": "1.0.0",
            },
            "paths": {
                "/students": {
                    "post": {
                        "summary": "Create a new student",
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "required": ["name", "age"],
                                        "properties": {
                                            "name": {"type": "string", "example": "Alice"},
                                            "age": {"type": "integer", "example": 20},
                                        },
                                    },
                                },
                            },
                        },
                        "responses": {
                            "201": {
                                "description": "Student created successfully",
                                "content": {"application/json": {"example": student_example}},
                            },
                        },
                    },
                    "get": {
                        "summary": "Get all students",
                        "responses": {
                            "200": {"description": "List of students"},
                        },
                    },
                },
                "/students/{id}": {
                    "get": {
                        "summary": "Get a student by ID",
                        "parameters": [id_parameter],
                        "responses": {
                            "200": {
                                "description": "The student",
                                "content": {"application/json": {"example": student_example}},
                            },
                            "404": {"description": "Student not found"},
                        },
                    },
                    "put": {
                        "summary": "Update a student by ID",
                        "parameters": [id_parameter],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "name": {"type": "string"},
                                            "age": {"type": "integer"},
                                            "grade": {"type": "string"},
                                        },
                                    },
                                },
                            },
                        },
                        "responses": {
                            "200": {"description": "Student updated successfully"},
                            "404": {"description": "Student not found"},
                        },
                    },
                    "delete": {
                        "summary": "Delete a student by ID",
                        "parameters": [id_parameter],
                        "responses": {
                            "204": {"description": "Student deleted successfully"},
                            "404": {"description": "Student not found (only with strict deletes)"},
                        },
                    },
                },
            },
        })
    });
    &DOCUMENT
}

pub async fn get_openapi_json() -> Json<&'static Value> {
    Json(openapi_document())
}

fn endpoint_rows(document: &Value) -> Vec<[Markup; 4]> {
    let Some(paths) = document["paths"].as_object() else {
        return vec![];
    };

    paths
        .iter()
        .flat_map(|(path, operations)| {
            operations
                .as_object()
                .into_iter()
                .flatten()
                .map(move |(method, operation)| {
                    let responses = operation["responses"]
                        .as_object()
                        .map(|responses| responses.keys().cloned().collect::<Vec<_>>().join(", "))
                        .unwrap_or_default();

                    [
                        html! { code {(method.to_uppercase())} },
                        html! { code {(path)} },
                        html! { (operation["summary"].as_str().unwrap_or_default()) },
                        html! { (responses) },
                    ]
                })
        })
        .collect()
}

pub async fn get_api_docs() -> Markup {
    let document = openapi_document();
    let swagger_base = format!("https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}");

    page(
        "Student CRUD API",
        html! {
            link rel="stylesheet" href={(swagger_base) "/swagger-ui.css"} {}
        },
        html! {
            (render_table(
                "Student CRUD API",
                ["Method", "Path", "Summary", "Responses"],
                endpoint_rows(document),
            ))
            p {
                "Raw document: " a href="/api-docs/openapi.json" {"openapi.json"}
            }
            div id="swagger-ui" {}
            script src={(swagger_base) "/swagger-ui-bundle.js"} crossorigin="anonymous" {}
            script {
                (PreEscaped(SWAGGER_UI_INIT))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::RuntimeConfiguration, data::in_memory::InMemoryStudentStore, routes::router,
        state::RegistryState,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[test]
    fn document_covers_every_route() {
        let document = openapi_document();
        assert_eq!(document["openapi"], "3.0.0");
        assert_eq!(document["info"]["title"], "Student CRUD API");

        let rows = endpoint_rows(document);
        assert_eq!(rows.len(), 5);

        let students = &document["paths"]["/students"];
        assert!(students["post"].is_object());
        assert!(students["get"].is_object());
        let student = &document["paths"]["/students/{id}"];
        for method in ["get", "put", "delete"] {
            assert!(student[method].is_object(), "{method} is documented");
        }
    }

    #[tokio::test]
    async fn serves_page_and_json() {
        let app = router(RegistryState::new(
            InMemoryStudentStore::new(),
            RuntimeConfiguration::default(),
        ));

        let response = app
            .clone()
            .oneshot(Request::get("/api-docs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let page = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(page.to_vec()).unwrap();
        assert!(page.contains("Student CRUD API"));
        assert!(page.contains("/students/{id}"));
        assert!(page.contains(r##"dom_id: "#swagger-ui""##));
        assert!(page.contains(r#"<div id="swagger-ui"></div>"#));

        let response = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let served: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(&served, openapi_document());
    }
}
