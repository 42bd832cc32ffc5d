use crate::{
    data::student::{Student, StudentFields, StudentId},
    error::{MissingStudentSnafu, RegistryResult},
    state::RegistryState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use snafu::{OptionExt, ensure};

pub async fn post_new_student(
    State(state): State<RegistryState>,
    Json(fields): Json<StudentFields>,
) -> (StatusCode, Json<Student>) {
    let student = state.students().await.create(fields);
    info!(id = %student.id, "Created student");

    (StatusCode::CREATED, Json(student))
}

pub async fn get_students(State(state): State<RegistryState>) -> Json<Vec<Student>> {
    Json(state.students().await.get_all())
}

pub async fn get_student(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> RegistryResult<Json<Student>> {
    let id: StudentId = id.parse()?;
    let student = state
        .students()
        .await
        .get_by_id(id)
        .context(MissingStudentSnafu { id })?;

    Ok(Json(student))
}

pub async fn put_student(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
    Json(fields): Json<StudentFields>,
) -> RegistryResult<Json<Student>> {
    let id: StudentId = id.parse()?;
    let student = state
        .students()
        .await
        .replace(id, fields)
        .context(MissingStudentSnafu { id })?;
    info!(%id, "Replaced student");

    Ok(Json(student))
}

/// Succeeds whether or not the student existed, unless strict deletes are configured.
pub async fn delete_student(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> RegistryResult<StatusCode> {
    let strict = state.config().strict_delete();

    let id: StudentId = match id.parse() {
        Ok(id) => id,
        Err(e) if strict => return Err(e),
        Err(e) => {
            debug!(?e, "Ignoring delete for unparseable id");
            return Ok(StatusCode::NO_CONTENT);
        }
    };

    let removed = state.students().await.remove(id);
    if removed {
        info!(%id, "Deleted student");
    } else {
        ensure!(!strict, MissingStudentSnafu { id });
        debug!(%id, "Nothing to delete");
    }

    Ok(StatusCode::NO_CONTENT)
}
