use thiserror::Error;

/// Failures of the calls that cannot answer with an empty result.
///
/// Plain lookups report absence with `Option`; only operations that have no
/// safe value to return use this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The collection holds no elements.
    #[error("collection is empty")]
    Empty,
    /// The requested key is not present.
    #[error("key not found")]
    KeyNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
