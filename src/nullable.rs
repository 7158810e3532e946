use crate::error::Result;
use crate::{NonNull, Opt, Optional};

/// An option where null is a value of its own.
///
/// `Null` is present: it is not empty, it unwraps (to `None`) and it takes
/// part in `map`, `filter` and friends. Wherever a nullable value is handed
/// out or taken in it is an `Option<T>`, `None` being the null.
///
/// ```
/// # use opt::*;
/// let null = Opt::nullable::<u8>(None);
/// assert!(null.is_null());
/// assert!(null.is_present());
/// assert_eq!(null.unwrap(), Ok(None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Empty,
    Null,
    Full(T),
}

impl<T> Nullable<T> {
    pub const EMPTY: Self = Self::Empty;
    pub const NULL: Self = Self::Null;

    pub const fn new(value: T) -> Self {
        Self::Full(value)
    }

    pub const fn empty() -> Self {
        Self::Empty
    }

    pub const fn null() -> Self {
        Self::Null
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Full(value) => Nullable::Full(value),
            Self::Null => Nullable::Null,
            Self::Empty => Nullable::Empty,
        }
    }

    /// `None` if empty, `Some(None)` if null.
    pub fn get(&self) -> Option<Option<&T>> {
        match self {
            Self::Full(value) => Some(Some(value)),
            Self::Null => Some(None),
            Self::Empty => None,
        }
    }

    /// Iterate over the held value.
    /// A null yields a single `None`.
    pub fn iter(&self) -> std::option::IntoIter<Option<&T>> {
        self.get().into_iter()
    }

    /// Map the held value, null included.
    /// A `None` from `f` is stored as null.
    pub fn map<F, R>(self, f: F) -> Nullable<R>
    where
        F: FnOnce(Option<T>) -> Option<R>,
    {
        match self.into_value() {
            Ok(value) => f(value).into(),
            Err(_) => Nullable::Empty,
        }
    }

    pub fn map_or_else<F, D, R>(self, f: F, default: D) -> Nullable<R>
    where
        F: FnOnce(Option<T>) -> Option<R>,
        D: FnOnce() -> Option<R>,
    {
        match self.into_value() {
            Ok(value) => f(value).into(),
            Err(_) => default().into(),
        }
    }

    pub fn flat_map<F, O>(self, f: F) -> O
    where
        F: FnOnce(Option<T>) -> O,
        O: Optional,
    {
        match self.into_value() {
            Ok(value) => f(value),
            Err(_) => O::empty(),
        }
    }

    pub fn flat_map_or_else<F, D, O>(self, f: F, default: D) -> O
    where
        F: FnOnce(Option<T>) -> O,
        D: FnOnce() -> O,
        O: Optional,
    {
        match self.into_value() {
            Ok(value) => f(value),
            Err(_) => default(),
        }
    }

    /// Keep the value (null included) only if it satisfies the predicate.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(Option<&T>) -> bool,
    {
        let keep = match self.get() {
            Some(value) => predicate(value),
            None => false,
        };

        match keep {
            true => self,
            false => Self::Empty,
        }
    }

    pub fn if_present<F>(self, f: F) -> Self
    where
        F: FnOnce(Option<&T>),
    {
        if let Some(value) = self.get() {
            f(value);
        }
        self
    }

    pub fn if_empty<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if let Self::Empty = self {
            f();
        }
        self
    }

    pub fn if_null<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if let Self::Null = self {
            f();
        }
        self
    }

    /// Call exactly one of `on_present` or `on_empty`.
    pub fn with<F, E>(self, on_present: F, on_empty: E) -> Self
    where
        F: FnOnce(Option<&T>),
        E: FnOnce(),
    {
        match self.get() {
            Some(value) => on_present(value),
            None => on_empty(),
        }
        self
    }

    /// Convert to the non-null family.
    ///
    /// A null is handled by the [`NullPolicy`](crate::NullPolicy) of the
    /// standard factory: rejected with [`Error::NullValue`](crate::Error::NullValue)
    /// or collapsed into an empty option.
    pub fn to_non_nullable(self) -> Result<NonNull<T>> {
        Opt::standard().narrow(self)
    }

    /// Compare the held value only. Null equals `None`; an empty option
    /// equals nothing.
    pub fn value_equals<U>(&self, value: Option<&U>) -> bool
    where
        U: PartialEq<T>,
    {
        match (self, value) {
            (Self::Full(held), Some(value)) => value == held,
            (Self::Null, None) => true,
            _ => false,
        }
    }
}

impl<T> Optional for Nullable<T> {
    type Value = Option<T>;

    fn empty() -> Self {
        Self::Empty
    }

    fn is_present(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    fn into_value(self) -> std::result::Result<Option<T>, Self> {
        match self {
            Self::Full(value) => Ok(Some(value)),
            Self::Null => Ok(None),
            Self::Empty => Err(Self::Empty),
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Full(value),
            None => Self::Null,
        }
    }
}

impl<T> IntoIterator for Nullable<T> {
    type IntoIter = std::option::IntoIter<Option<T>>;
    type Item = Option<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Nullable<T> {
    type IntoIter = std::option::IntoIter<Option<&'a T>>;
    type Item = Option<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn null_is_present() {
        let null = Nullable::<u8>::NULL;
        assert!(null.is_null());
        assert!(null.is_present());
        assert!(!null.is_empty());
        assert!(!Nullable::new(1).is_null());
        assert!(!Nullable::<u8>::EMPTY.is_null());
    }

    #[test]
    fn or_keeps_null() {
        assert_eq!(Nullable::<u8>::NULL.or(Some(1)), None);
        assert_eq!(Nullable::EMPTY.or(Some(1)), Some(1));
        assert_eq!(Nullable::new(2).or(Some(1)), Some(2));
    }

    #[test]
    fn map_null() {
        let value = Nullable::<u8>::NULL.map(|x| Some(x.is_none()));
        assert_eq!(value, Nullable::Full(true));

        let value = Nullable::new(1).map(|_| None::<u8>);
        assert_eq!(value, Nullable::Null);

        let value = Nullable::<u8>::EMPTY.map(|x| x);
        assert_eq!(value, Nullable::Empty);
    }

    #[test]
    fn map_or_else() {
        let value = Nullable::<u8>::EMPTY.map_or_else(|x| x, || None);
        assert_eq!(value, Nullable::Null);

        let value = Nullable::<u8>::EMPTY.map_or_else(|x| x, || Some(3));
        assert_eq!(value, Nullable::Full(3));
    }

    #[test]
    fn filter_tests_null() {
        assert_eq!(Nullable::<u8>::NULL.filter(|v| v.is_none()), Nullable::Null);
        assert_eq!(Nullable::<u8>::NULL.filter(|v| v.is_some()), Nullable::Empty);
        assert_eq!(Nullable::new(3).filter(|v| v == Some(&3)), Nullable::Full(3));
        assert_eq!(Nullable::<u8>::EMPTY.filter(|_| true), Nullable::Empty);
    }

    #[test]
    fn iter() {
        assert_eq!(Nullable::<u8>::NULL.iter().collect::<Vec<_>>(), vec![None]);
        assert_eq!(Nullable::new(1).iter().collect::<Vec<_>>(), vec![Some(&1)]);
        assert_eq!(Nullable::<u8>::EMPTY.iter().count(), 0);
        assert_eq!(Nullable::new(1).into_iter().collect::<Vec<_>>(), vec![Some(1)]);
    }

    #[test]
    fn value_equals() {
        assert!(Nullable::new(1).value_equals(Some(&1)));
        assert!(!Nullable::new(1).value_equals(None::<&i32>));
        assert!(Nullable::<i32>::NULL.value_equals(None::<&i32>));
        assert!(!Nullable::<i32>::EMPTY.value_equals(None::<&i32>));
    }

    #[test]
    fn if_null() {
        let mut calls = 0;
        Nullable::<u8>::NULL.if_null(|| calls += 1);
        Nullable::new(1).if_null(|| calls += 1);
        Nullable::<u8>::EMPTY.if_null(|| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn as_ref_does_not_consume() {
        let value = Nullable::new(String::from("ab"));
        assert_eq!(value.as_ref().map(|s| s.map(|s| s.len())), Nullable::Full(2));
        assert_eq!(value.get(), Some(Some(&String::from("ab"))));
        assert_eq!(Nullable::<String>::NULL.get(), Some(None));
    }

    #[test]
    fn empties_are_equal() {
        assert_eq!(Nullable::<u8>::EMPTY, Nullable::empty());
        assert_eq!(Nullable::<u8>::default(), Nullable::EMPTY);
        assert_ne!(Nullable::<u8>::EMPTY, Nullable::NULL);
    }
}
