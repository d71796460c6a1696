use std::fmt::Display;

/// 服务端返回的非 2xx 响应
#[derive(Debug)]
pub struct HttpError {
    status: u16,
    message: Option<String>,
    body: String,
}

impl HttpError {
    pub(crate) fn new(status: u16, message: Option<String>, body: &str) -> Self {
        Self {
            status,
            message,
            body: body.to_owned(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// 错误响应体中的 `message` 字段
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{{status: {}, message: {}}}", self.status, msg),
            None => write!(f, "{{status: {}, body: {}}}", self.status, self.body),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Config(String),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Ureq(#[from] ureq::Error),
    #[error("{0}")]
    Params(String),
    #[error("http error: {0}")]
    Http(HttpError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 服务端给出的错误信息，只有 HTTP 错误且响应体带 `message` 时才有
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Http(e) => e.message(),
            _ => None,
        }
    }
}

pub type AdminResult<T> = std::result::Result<T, Error>;
