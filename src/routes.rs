use crate::{
    routes::{
        api_docs::{get_api_docs, get_openapi_json},
        students::{
            delete_student, get_student, get_students, post_new_student, put_student,
        },
    },
    state::RegistryState,
};
use axum::{Router, routing::get};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub mod api_docs;
pub mod students;

pub fn router(state: RegistryState) -> Router {
    let body_limit = RequestBodyLimitLayer::new(state.config().body_limit());
    let trace_layer = TraceLayer::new_for_http();

    Router::new()
        .route("/students", get(get_students).post(post_new_student))
        .route(
            "/students/{id}",
            get(get_student).put(put_student).delete(delete_student),
        )
        .route("/api-docs", get(get_api_docs))
        .route("/api-docs/openapi.json", get(get_openapi_json))
        .layer(body_limit)
        .layer(trace_layer)
        .with_state(state)
}
