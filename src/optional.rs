use crate::error::UnwrapError;

/// Capabilities shared by both option families.
///
/// `Value` is what a present option hands out: `T` for [`NonNull`](crate::NonNull)
/// and `Option<T>` for [`Nullable`](crate::Nullable), where `None` is the
/// explicit null.
///
/// ```
/// # use opt::*;
/// let value = Opt::non_null(1).or(2);
/// assert_eq!(value, 1);
///
/// let value = Opt::nullable::<u8>(None).or(Some(2));
/// assert_eq!(value, None);
/// ```
pub trait Optional: Sized {
    type Value;

    /// The absent option of this family.
    fn empty() -> Self;

    /// `true` if a value is held. For the nullable family this includes an
    /// explicit null.
    fn is_present(&self) -> bool;

    fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Move the held value out, or hand back the empty option.
    fn into_value(self) -> Result<Self::Value, Self>;

    /// The held value, or an [`UnwrapError`] holding the empty option.
    fn unwrap(self) -> Result<Self::Value, UnwrapError<Self>> {
        self.into_value().map_err(|empty| {
            #[cfg(feature = "log")]
            log::trace!("unwrap on an empty option");
            UnwrapError::new(empty)
        })
    }

    /// The held value, or `err` if empty.
    fn or_throw<E>(self, err: E) -> Result<Self::Value, E> {
        self.into_value().map_err(|_| err)
    }

    /// The held value, or the error produced by `f` if empty.
    fn or_else_throw<E, F>(self, f: F) -> Result<Self::Value, E>
    where
        F: FnOnce() -> E,
    {
        self.into_value().map_err(|_| f())
    }

    fn or(self, default: Self::Value) -> Self::Value {
        self.into_value().unwrap_or(default)
    }

    /// The held value, or the result of `f`.
    /// `f` is only called if the option is empty.
    fn or_get<F>(self, f: F) -> Self::Value
    where
        F: FnOnce() -> Self::Value,
    {
        self.into_value().unwrap_or_else(|_| f())
    }

    /// `self` if present, otherwise `other`.
    fn or_option(self, other: Self) -> Self {
        match self.is_present() {
            true => self,
            false => other,
        }
    }

    fn or_option_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.is_present() {
            true => self,
            false => f(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{NonNull, Nullable};

    #[test]
    fn is_empty_is_the_complement() {
        assert!(NonNull::<u8>::empty().is_empty());
        assert!(!NonNull::new(1).is_empty());
        assert!(Nullable::<u8>::empty().is_empty());
        assert!(!Nullable::<u8>::NULL.is_empty());
    }

    #[test]
    fn or_get_is_lazy() {
        let mut calls = 0;
        let value = NonNull::new(1).or_get(|| {
            calls += 1;
            2
        });
        assert_eq!(value, 1);
        assert_eq!(calls, 0);

        let value = NonNull::empty().or_get(|| {
            calls += 1;
            2
        });
        assert_eq!(value, 2);
        assert_eq!(calls, 1);
    }

    #[test]
    fn or_option() {
        let a = NonNull::new(1);
        assert_eq!(a.or_option(NonNull::new(2)), NonNull::Full(1));
        assert_eq!(NonNull::empty().or_option(NonNull::new(2)), NonNull::Full(2));
        assert_eq!(Nullable::NULL.or_option_with(|| Nullable::new(2)), Nullable::Null);
        assert_eq!(Nullable::EMPTY.or_option_with(|| Nullable::new(2)), Nullable::Full(2));
    }
}
