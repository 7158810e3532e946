use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::{NonNull, Nullable};

static STANDARD: OnceLock<RwLock<Opt>> = OnceLock::new();

/// What to do when a null has to become part of the non-null family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// Fail with [`Error::NullValue`]
    #[default]
    Reject,
    /// Treat the null as absent
    Collapse,
}

/// Option factory.
///
/// Every constructor exists twice: as a method on an `Opt` value, for callers
/// that pass their factory around, and as an associated function that goes
/// through the process wide [standard instance](Opt::standard).
///
/// ```
/// # use opt::*;
/// let opt = Opt::with_null_policy(NullPolicy::Collapse);
/// let value = opt.narrow(Nullable::<u8>::NULL);
/// assert_eq!(value, Ok(NonNull::Empty));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Opt {
    null_policy: NullPolicy,
}

impl Opt {
    pub const fn new() -> Self {
        Self::with_null_policy(NullPolicy::Reject)
    }

    pub const fn with_null_policy(null_policy: NullPolicy) -> Self {
        Self { null_policy }
    }

    pub const fn null_policy(&self) -> NullPolicy {
        self.null_policy
    }

    /// The process wide factory.
    /// Unless replaced with [`set_standard_instance`](Self::set_standard_instance)
    /// this is `Opt::new()`.
    pub fn standard() -> Self {
        *slot().read()
    }

    /// Replace the process wide factory. The last write wins.
    pub fn set_standard_instance(opt: Opt) {
        #[cfg(feature = "log")]
        log::debug!("standard option factory replaced (null policy: {:?})", opt.null_policy);
        *slot().write() = opt;
    }

    // -----------------------------------------------------------------------------
    //   - Constructors -
    // -----------------------------------------------------------------------------
    pub fn new_non_null<T>(&self, value: T) -> NonNull<T> {
        NonNull::Full(value)
    }

    pub fn new_non_null_empty<T>(&self) -> NonNull<T> {
        NonNull::Empty
    }

    /// A present non-null option, failing if `value` is null.
    pub fn new_non_null_checked<T>(&self, value: Option<T>) -> Result<NonNull<T>> {
        value.map(NonNull::Full).ok_or(Error::NullValue)
    }

    /// A non-null option that is empty if `value` is null.
    pub fn new_non_null_of_nullable<T>(&self, value: Option<T>) -> NonNull<T> {
        value.into()
    }

    /// A present nullable option. `None` is stored as null.
    pub fn new_nullable<T>(&self, value: Option<T>) -> Nullable<T> {
        value.into()
    }

    pub fn new_nullable_empty<T>(&self) -> Nullable<T> {
        Nullable::Empty
    }

    /// Move a nullable option into the non-null family, applying the null policy.
    pub fn narrow<T>(&self, value: Nullable<T>) -> Result<NonNull<T>> {
        match value {
            Nullable::Full(value) => Ok(NonNull::Full(value)),
            Nullable::Empty => Ok(NonNull::Empty),
            Nullable::Null => match self.null_policy {
                NullPolicy::Reject => {
                    #[cfg(feature = "log")]
                    log::trace!("null rejected by the non-null family");
                    Err(Error::NullValue)
                }
                NullPolicy::Collapse => {
                    #[cfg(feature = "log")]
                    log::trace!("null collapsed into an empty option");
                    Ok(NonNull::Empty)
                }
            },
        }
    }

    /// Map a non-null option with a function that may produce null,
    /// applying the null policy to a `None` result.
    pub fn try_map<T, F, R>(&self, value: NonNull<T>, f: F) -> Result<NonNull<R>>
    where
        F: FnOnce(T) -> Option<R>,
    {
        match value {
            NonNull::Full(value) => self.narrow(f(value).into()),
            NonNull::Empty => Ok(NonNull::Empty),
        }
    }

    // -----------------------------------------------------------------------------
    //   - Standard instance shorthands -
    // -----------------------------------------------------------------------------
    pub fn non_null<T>(value: T) -> NonNull<T> {
        Self::standard().new_non_null(value)
    }

    pub fn non_null_empty<T>() -> NonNull<T> {
        Self::standard().new_non_null_empty()
    }

    pub fn non_null_checked<T>(value: Option<T>) -> Result<NonNull<T>> {
        Self::standard().new_non_null_checked(value)
    }

    pub fn non_null_of_nullable<T>(value: Option<T>) -> NonNull<T> {
        Self::standard().new_non_null_of_nullable(value)
    }

    pub fn nullable<T>(value: Option<T>) -> Nullable<T> {
        Self::standard().new_nullable(value)
    }

    pub fn nullable_empty<T>() -> Nullable<T> {
        Self::standard().new_nullable_empty()
    }
}

impl Default for Opt {
    fn default() -> Self {
        Self::new()
    }
}

fn slot() -> &'static RwLock<Opt> {
    STANDARD.get_or_init(|| RwLock::new(Opt::new()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Optional;

    #[test]
    fn checked_rejects_null() {
        let opt = Opt::new();
        assert_eq!(opt.new_non_null_checked(Some(1)), Ok(NonNull::Full(1)));
        assert_eq!(opt.new_non_null_checked(None::<u8>), Err(Error::NullValue));
    }

    #[test]
    fn of_nullable() {
        let opt = Opt::new();
        assert!(opt.new_non_null_of_nullable(None::<u8>).is_empty());
        assert_eq!(opt.new_non_null_of_nullable(Some(1)).unwrap(), Ok(1));
    }

    #[test]
    fn narrow() {
        let reject = Opt::new();
        let collapse = Opt::with_null_policy(NullPolicy::Collapse);

        assert_eq!(reject.narrow(Nullable::<u8>::NULL), Err(Error::NullValue));
        assert_eq!(collapse.narrow(Nullable::<u8>::NULL), Ok(NonNull::Empty));

        for opt in [reject, collapse] {
            assert_eq!(opt.narrow(Nullable::new(1)), Ok(NonNull::Full(1)));
            assert_eq!(opt.narrow(Nullable::<u8>::EMPTY), Ok(NonNull::Empty));
        }
    }

    #[test]
    fn try_map_uses_the_given_factory() {
        // Reject is the default; the explicit factory must win over it.
        Opt::set_standard_instance(Opt::new());
        let collapse = Opt::with_null_policy(NullPolicy::Collapse);

        assert_eq!(collapse.try_map(NonNull::new(1), |_| None::<u8>), Ok(NonNull::Empty));
        assert_eq!(collapse.try_map(NonNull::new(1), |x| Some(x + 1)), Ok(NonNull::Full(2)));
        assert_eq!(Opt::new().try_map(NonNull::new(1), |_| None::<u8>), Err(Error::NullValue));
        assert_eq!(NonNull::new(1).try_map(|_| None::<u8>), Err(Error::NullValue));
    }

    #[test]
    fn default_policy() {
        assert_eq!(Opt::default().null_policy(), NullPolicy::Reject);
        assert_eq!(Opt::default(), Opt::new());
    }
}
