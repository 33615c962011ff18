use derive_more::Display;
use salvo::{prelude::StatusError, writer::Json, Piece, Response};

use self::http::ErrorResponse;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Display)]
pub struct UnknownError(BoxedError);

impl std::error::Error for UnknownError {}

impl UnknownError {
    pub fn new(err: BoxedError) -> Self {
        Self(err)
    }

    pub fn inner(self) -> BoxedError {
        self.0
    }

    pub fn ref_inner(&self) -> &BoxedError {
        &self.0
    }
}

impl From<BoxedError> for UnknownError {
    fn from(err: BoxedError) -> Self {
        Self::new(err)
    }
}

impl From<reqwest::Error> for UnknownError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.into())
    }
}

impl Piece for UnknownError {
    fn render(self, res: &mut Response) {
        let status = StatusError::internal_server_error();
        res.render(Json(ErrorResponse::from_status_error(&status, ())));
        res.set_status_error(status);
    }
}

pub mod app {
    use derive_more::Display;
    use salvo::{prelude::StatusError, writer::Json, Piece};
    use serde::Serialize;

    use super::{extraction::ExtractionError, http::ErrorResponse};

    #[derive(Debug, Display, Serialize)]
    pub enum ApplicationError {
        #[display(fmt = "parse failed: {_0}")]
        Extraction(ExtractionError),
    }

    impl std::error::Error for ApplicationError {}

    impl From<ExtractionError> for ApplicationError {
        fn from(err: ExtractionError) -> Self {
            Self::Extraction(err)
        }
    }

    impl Piece for ApplicationError {
        fn render(self, res: &mut salvo::Response) {
            let status = match &self {
                ApplicationError::Extraction(err) => match err {
                    ExtractionError::Unavailable(_) | ExtractionError::Timeout => {
                        StatusError::service_unavailable()
                    }
                    _ => StatusError::internal_server_error(),
                },
            };
            res.render(Json(ErrorResponse {
                title: status.name.clone(),
                message: self.to_string(),
                error: self,
            }));
            res.set_status_error(status);
        }
    }
}

pub mod extraction {
    use derive_more::Display;
    use serde::Serialize;

    use super::UnknownError;

    #[derive(Debug, Display)]
    pub enum ExtractionError {
        /// The extraction backend could not be reached.
        #[display(fmt = "extractor unavailable: {_0}")]
        Unavailable(String),
        #[display(fmt = "extraction endpoint returned status {_0}")]
        RemoteStatus(u16),
        #[display(fmt = "could not decode extraction response: {_0}")]
        Decode(String),
        #[display(fmt = "extraction request timed out")]
        Timeout,
        #[display(fmt = "unknown extraction error: {_0}")]
        Unknown(UnknownError),
    }

    impl std::error::Error for ExtractionError {}

    impl Serialize for ExtractionError {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let code = match self {
                Self::Unavailable(_) => "unavailable",
                Self::RemoteStatus(_) => "remote_status",
                Self::Decode(_) => "decode",
                Self::Timeout => "timeout",
                Self::Unknown(_) => "unknown",
            };
            serializer.serialize_str(code)
        }
    }

    impl From<reqwest::Error> for ExtractionError {
        fn from(err: reqwest::Error) -> Self {
            if err.is_timeout() {
                return Self::Timeout;
            }
            if let Some(status) = err.status() {
                return Self::RemoteStatus(status.as_u16());
            }
            if err.is_connect() || err.is_builder() {
                return Self::Unavailable(err.to_string());
            }
            if err.is_decode() {
                return Self::Decode(err.to_string());
            }

            Self::Unknown(err.into())
        }
    }
}

pub mod http {
    use derive_more::{Display, Error};
    use salvo::{http::ParseError, prelude::StatusError, writer::Json, Piece, Response};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Display, Clone, Error, Serialize, Deserialize)]
    pub enum BadRequest {
        /// The request body is not a JSON object carrying a "text" member.
        #[display(fmt = "missing 'text' in JSON body")]
        MissingText,
    }

    #[derive(Debug, Display, Clone, Error, Serialize, Deserialize)]
    #[display(fmt = "Response error: {title}, {message}")]
    pub struct ErrorResponse<T> {
        pub title: String,
        pub message: String,
        pub error: T,
    }

    impl<T> ErrorResponse<T> {
        pub fn from_status_error(status: &StatusError, err: T) -> Self {
            Self {
                title: status.name.clone(),
                message: status
                    .summary
                    .clone()
                    .unwrap_or_else(|| status.name.clone()),
                error: err,
            }
        }
    }

    impl From<ParseError> for BadRequest {
        fn from(_: ParseError) -> Self {
            BadRequest::MissingText
        }
    }

    impl Piece for BadRequest {
        fn render(self, res: &mut Response) {
            let status = StatusError::bad_request();
            res.render(Json(ErrorResponse {
                title: status.name.clone(),
                message: self.to_string(),
                error: self,
            }));
            res.set_status_error(status);
        }
    }
}
