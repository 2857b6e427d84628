#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// non-2xx reply; `body` is the reply decoded as lossy utf-8
    #[error("api server error code={status}: {body}")]
    Http { status: u16, body: String },
    #[error("json encode/decode fail: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid multipart part: {0}")]
    FormPart(String),
    #[error("access token is empty")]
    EmptyAccessToken,
    #[error("invalid request path {0:?}")]
    InvalidPath(String),
    #[error("build header value error: {0}")]
    HeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error("parse url string: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("client builder without base url")]
    ClientBuilderMissBaseUrl,
    #[error("read or write file {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to find env var")]
    Var(#[from] std::env::VarError),
}

impl Error {
    /// status code of a non-2xx reply, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
