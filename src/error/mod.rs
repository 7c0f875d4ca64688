mod constants;

pub use constants::*;

use crate::validation::Violation;
use axum::{
    extract::multipart::MultipartError,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;
use std::borrow::Cow;

#[derive(Debug)]
pub struct Error {
    status: StatusCode,
    code: u32,
    message: Cow<'static, str>,
    violations: Vec<Violation>,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, code: u32, message: &'static str) -> Error {
        Self {
            status,
            code,
            message: Cow::Borrowed(message),
            violations: Vec::new(),
        }
    }

    /// Replaces the fixed message, used to surface the underlying cause.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    #[inline]
    pub fn with_violations(mut self, violations: Vec<Violation>) -> Self {
        self.violations = violations;
        self
    }

    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        let body = if self.violations.is_empty() {
            json!({
                "code": self.code(),
                "error": self.message(),
            })
        } else {
            json!({
                "errors": self.violations(),
            })
        };

        serde_json::to_writer(&mut buf, &body).expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR.with_message(error.to_string())
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        error!("failed to write upload: {:?}", error);
        constants::UPLOAD_ERROR.with_message(error.to_string())
    }
}

impl From<MultipartError> for Error {
    #[inline]
    fn from(error: MultipartError) -> Self {
        debug!("rejected multipart body: {}", error.body_text());

        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            constants::PAYLOAD_TOO_LARGE
        } else {
            constants::MULTIPART_INVALID
        }
    }
}

impl From<Vec<Violation>> for Error {
    #[inline]
    fn from(violations: Vec<Violation>) -> Self {
        constants::VALIDATION_FAILED.with_violations(violations)
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $message:literal $(,)?) => {
        pub const $name: $crate::error::Error = $crate::error::Error::new(
            ::axum::http::StatusCode::$status,
            $code,
            $message,
        );
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
