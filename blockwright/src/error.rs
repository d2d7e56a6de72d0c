use std::backtrace::Backtrace;

use thiserror::Error;

use crate::template::NodePath;

pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Error, Debug)]
#[error("{kind:?}")]
pub struct EditError {
    pub kind: EditErrorKind,
    pub backtrace: Backtrace,
}

impl EditError {
    pub fn new(kind: EditErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }

    pub fn path(path: &NodePath) -> Self {
        Self::new(EditErrorKind::Path(path.iter().copied().collect()))
    }
}

impl<T> From<T> for EditError
where
    EditErrorKind: From<T>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

#[derive(Error, Debug)]
pub enum EditErrorKind {
    #[error("Path does not resolve to a node: {0:?}")]
    Path(Vec<usize>),

    #[error("Target element can not hold children")]
    InvalidTarget,

    #[error("Element can not be moved into its own subtree")]
    IllegalMove,

    #[error("Unknown element type: {0}")]
    UnknownKind(String),

    #[error("Json error")]
    Json(#[from] serde_json::Error),
}

impl EditErrorKind {
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}

pub trait EditErrorFast<T> {
    fn invalid_target(self) -> Result<T>;
}

impl<T> EditErrorFast<T> for Option<T> {
    fn invalid_target(self) -> Result<T> {
        self.ok_or_else(|| EditError::new(EditErrorKind::InvalidTarget))
    }
}
