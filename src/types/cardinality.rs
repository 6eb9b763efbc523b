use crate::types::alloc_type::Vec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many elements a list turned out to hold: none, exactly one, or more.
///
/// Useful when downstream handling differs by count, letting call sites
/// pattern-match instead of re-checking `len()`.
///
/// # Examples
///
/// ```
/// use batch_rail::Cardinality;
///
/// match Cardinality::from_vec(vec![7]) {
///     Cardinality::Empty => unreachable!(),
///     Cardinality::Single(n) => assert_eq!(n, 7),
///     Cardinality::Multiple(_) => unreachable!(),
/// }
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Cardinality<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T> Cardinality<T> {
    /// Classifies a `Vec` by its element count.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Cardinality;
    ///
    /// assert_eq!(Cardinality::<i32>::from_vec(vec![]), Cardinality::Empty);
    /// assert_eq!(Cardinality::from_vec(vec![1, 2]), Cardinality::Multiple(vec![1, 2]));
    /// ```
    pub fn from_vec(mut items: Vec<T>) -> Self {
        if items.len() > 1 {
            return Self::Multiple(items);
        }
        match items.pop() {
            Some(item) => Self::Single(item),
            None => Self::Empty,
        }
    }

    /// Returns the element count this variant represents.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Multiple(items) => items.len(),
        }
    }

    /// Returns `true` for [`Cardinality::Empty`].
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Flattens the variant back into a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(item) => {
                let mut items = Vec::with_capacity(1);
                items.push(item);
                items
            }
            Self::Multiple(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for Cardinality<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for Cardinality<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
