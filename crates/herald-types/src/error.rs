use axum::{http::StatusCode, response::IntoResponse};

pub type HrResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	UnknownSetting(Box<str>),
	UnsupportedType(Box<str>),
	Validation(Box<str>),
	Config(Box<str>),
	DbError,

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::UnknownSetting(key) => write!(f, "unknown setting '{}'", key),
			Error::UnsupportedType(tag) => write!(f, "unsupported setting type '{}'", tag),
			Error::Validation(msg) => write!(f, "validation failed: {}", msg),
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
			Error::UnknownSetting(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
			Error::PermissionDenied => (StatusCode::FORBIDDEN, "permission denied").into_response(),
			Error::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
			_ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		}
	}
}

// vim: ts=4
