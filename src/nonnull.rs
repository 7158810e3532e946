use crate::error::Result;
use crate::{Nullable, Opt, Optional};

/// An option that never holds null.
///
/// ```
/// # use opt::*;
/// let value = Opt::non_null(5).map(|x| x * 2);
/// assert_eq!(value.unwrap(), Ok(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonNull<T> {
    Empty,
    Full(T),
}

impl<T> NonNull<T> {
    pub const EMPTY: Self = Self::Empty;

    pub const fn new(value: T) -> Self {
        Self::Full(value)
    }

    pub const fn empty() -> Self {
        Self::Empty
    }

    pub fn as_ref(&self) -> NonNull<&T> {
        match self {
            Self::Full(value) => NonNull::Full(value),
            Self::Empty => NonNull::Empty,
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Full(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Iterate over the held value: zero items if empty, one if present.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.get().into_iter()
    }

    pub fn map<F, R>(self, f: F) -> NonNull<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Full(value) => NonNull::Full(f(value)),
            Self::Empty => NonNull::Empty,
        }
    }

    /// Map with a function that may produce null.
    ///
    /// A null result is handled by the [`NullPolicy`](crate::NullPolicy) of the
    /// standard factory. Use [`Opt::try_map`] to pick the factory.
    pub fn try_map<F, R>(self, f: F) -> Result<NonNull<R>>
    where
        F: FnOnce(T) -> Option<R>,
    {
        Opt::standard().try_map(self, f)
    }

    /// Like [`map`](Self::map) but an empty option becomes present with the
    /// value of `default`.
    pub fn map_or_else<F, D, R>(self, f: F, default: D) -> NonNull<R>
    where
        F: FnOnce(T) -> R,
        D: FnOnce() -> R,
    {
        match self {
            Self::Full(value) => NonNull::Full(f(value)),
            Self::Empty => NonNull::Full(default()),
        }
    }

    pub fn flat_map<F, O>(self, f: F) -> O
    where
        F: FnOnce(T) -> O,
        O: Optional,
    {
        match self {
            Self::Full(value) => f(value),
            Self::Empty => O::empty(),
        }
    }

    pub fn flat_map_or_else<F, D, O>(self, f: F, default: D) -> O
    where
        F: FnOnce(T) -> O,
        D: FnOnce() -> O,
        O: Optional,
    {
        match self {
            Self::Full(value) => f(value),
            Self::Empty => default(),
        }
    }

    /// Keep the value only if it satisfies the predicate.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Full(value) => match predicate(&value) {
                true => Self::Full(value),
                false => Self::Empty,
            },
            Self::Empty => Self::Empty,
        }
    }

    pub fn if_present<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Full(value) = &self {
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

    /// Call exactly one of `on_present` or `on_empty`.
    pub fn with<F, E>(self, on_present: F, on_empty: E) -> Self
    where
        F: FnOnce(&T),
        E: FnOnce(),
    {
        match &self {
            Self::Full(value) => on_present(value),
            Self::Empty => on_empty(),
        }
        self
    }

    pub fn to_nullable(self) -> Nullable<T> {
        self.to_nullable_with(false)
    }

    /// Convert to the nullable family.
    /// If `absent_as_null` is set an empty option becomes a present null.
    pub fn to_nullable_with(self, absent_as_null: bool) -> Nullable<T> {
        match self {
            Self::Full(value) => Nullable::Full(value),
            Self::Empty if absent_as_null => Nullable::Null,
            Self::Empty => Nullable::Empty,
        }
    }

    /// Compare the held value only. An empty option equals nothing.
    pub fn value_equals<U>(&self, value: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Self::Full(held) => value == held,
            Self::Empty => false,
        }
    }
}

impl<T> Optional for NonNull<T> {
    type Value = T;

    fn empty() -> Self {
        Self::Empty
    }

    fn is_present(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    fn into_value(self) -> std::result::Result<T, Self> {
        match self {
            Self::Full(value) => Ok(value),
            Self::Empty => Err(Self::Empty),
        }
    }
}

impl<T> Default for NonNull<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for NonNull<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Full(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<NonNull<T>> for Option<T> {
    fn from(value: NonNull<T>) -> Self {
        value.into_value().ok()
    }
}

impl<T> IntoIterator for NonNull<T> {
    type IntoIter = std::option::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonNull<T> {
    type IntoIter = std::option::IntoIter<&'a T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
