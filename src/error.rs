pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A null value was given where the non-null family requires a value
    #[error("null value where a non-null value is required")]
    NullValue,
}

/// Unwrapping an empty option.
///
/// The empty option that failed to unwrap is kept so the caller can tell which
/// family (and which value type) it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("attempted to unwrap the value of an empty option")]
pub struct UnwrapError<O> {
    option: O,
}

impl<O> UnwrapError<O> {
    pub(crate) fn new(option: O) -> Self {
        Self { option }
    }

    /// The option that failed to unwrap.
    pub fn option(&self) -> &O {
        &self.option
    }

    /// Take back the option that failed to unwrap.
    pub fn into_option(self) -> O {
        self.option
    }
}
