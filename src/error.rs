use thiserror::Error;

use crate::Xid;

/// Errors raised by a [`DrawContext`](crate::DrawContext) implementation.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("unable to load font '{0}'")]
    UnknownFont(String),

    #[error("{0}")]
    Raw(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error("'{0}' is not a valid hex colour")]
    InvalidColor(String),

    #[error("there is no workspace with index {0}")]
    UnknownWorkspace(usize),

    #[error("there is no screen with index {0}")]
    UnknownScreen(usize),

    #[error("there is no window with id {0}")]
    UnknownWindow(Xid),

    #[error("window {0} is already managed")]
    DuplicateWindow(Xid),

    #[error("invalid workspace setup: {0}")]
    InvalidWorkspaces(String),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to initialise logger: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, Error>;
