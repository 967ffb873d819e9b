use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowError>;

#[derive(Error, Debug)]
pub enum FlowError {
    /// A caller contract was violated, e.g. selection was requested with
    /// fewer than two candidates. Fatal to the session.
    #[error("invalid session state: {0}")]
    InvalidSessionState(&'static str),

    #[error("invalid flow configuration: {0}")]
    Config(String),

    /// The prompter failed to deliver or receive a message; the session is
    /// abandoned and its state dropped.
    #[error("transport error: {0}")]
    Transport(anyhow::Error),
}

impl From<anyhow::Error> for FlowError {
    fn from(err: anyhow::Error) -> Self {
        FlowError::Transport(err)
    }
}
