use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to parse json document")]
    Json(#[from] serde_json::Error),
    #[error("unable to parse mime: expected '{0}', found '{1}'")]
    MimeParse(&'static str, String),
}
