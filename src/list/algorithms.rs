use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Reuses the nodes of `self`: elements are cloned in place, missing ones
    /// are appended and extra ones are removed.
    fn clone_from(&mut self, other: &Self) {
        let mut iter_other = other.iter();
        let mut cursor_mut = self.cursor_start_mut();
        while let Ok(elem) = cursor_mut.current_mut() {
            let Some(elem_other) = iter_other.next() else {
                break;
            };
            elem.clone_from(elem_other);
            if cursor_mut.move_next().is_err() {
                break;
            }
        }
        // Either `self` ran out of nodes, or `other` ran out of elements.
        for elem_other in iter_other {
            cursor_mut.insert(elem_other.clone());
        }
        while cursor_mut.remove().is_ok() {}
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

/// Writes every element followed by a single space, from the front to the back.
///
/// # Examples
///
/// ```
/// use slist::List;
///
/// let list = List::from([1, 2, 3]);
/// assert_eq!(list.to_string(), "1 2 3 ");
/// assert_eq!(List::<i32>::new().to_string(), "");
/// ```
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|elt| write!(f, "{} ", elt))
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// Unlike [`List::find`], searching an empty list is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.contains(&0), false);
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}
