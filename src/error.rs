use crate::data::student::StudentId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use snafu::Snafu;
use std::{
    net::{AddrParseError, SocketAddr},
    num::ParseIntError,
    str::ParseBoolError,
};

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RegistryError {
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: StudentId },
    #[snafu(display("Unable to parse student id {:?}", original))]
    InvalidStudentId {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Student ids start at 1, got {:?}", original))]
    ZeroStudentId { original: String },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse server address {:?}", original))]
    ParseServerAddr {
        source: AddrParseError,
        original: String,
    },
    #[snafu(display("Unable to parse body limit {:?}", original))]
    ParseBodyLimit {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to parse flag `{}` from {:?}", name, original))]
    ParseFlag {
        source: ParseBoolError,
        name: &'static str,
        original: String,
    },
    #[snafu(display("Unable to listen on {}", addr))]
    BindListener {
        source: std::io::Error,
        addr: SocketAddr,
    },
    #[snafu(display("Error serving app"))]
    Serve { source: std::io::Error },
}

impl IntoResponse for RegistryError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found

        let status_code = match &self {
            Self::MissingStudent { .. } => NF,
            //a non-numeric id can never match a record, so it is just as missing
            Self::InvalidStudentId { .. } | Self::ZeroStudentId { .. } => NF,
            Self::BadEnvVar { .. }
            | Self::ParseServerAddr { .. }
            | Self::ParseBodyLimit { .. }
            | Self::ParseFlag { .. } => ISE,
            Self::BindListener { .. } | Self::Serve { .. } => ISE,
        };

        if status_code == NF {
            debug!(?self, "Not found");
            (status_code, "Not Found").into_response()
        } else {
            error!(?self, "Error!");
            (status_code, self.to_string()).into_response()
        }
    }
}
