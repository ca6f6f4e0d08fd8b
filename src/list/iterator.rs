use crate::list::{Link, List, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator over the elements of a `List`.
///
/// It walks the chain from a node to the end of the list, and knows how
/// many elements are left.
///
/// The `Iter` borrows (immutably) from the list, so the list cannot be
/// written while iterating.
///
/// # Examples
///
/// ```compile_fail
/// use slist::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Link<T>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(next: Link<T>, len: usize) -> Self {
        let _marker = PhantomData;
        Self { next, len, _marker }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self::new(self.next, self.len)
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&DebugRest(self.clone())).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the element of the next node and step forward, or return `None`
    /// at the end of the list.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // SAFETY: `current` is a node of the list, which is borrowed for `'a`.
        let current = unsafe { &*current.as_ptr() };
        self.next = current.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// The `IterMut` borrows (mutably) from the list, so the list cannot be
/// read while iterating.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use slist::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    next: Link<T>,
    len: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(next: Link<T>, len: usize) -> Self {
        let _marker = PhantomData;
        Self { next, len, _marker }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rest = Iter::new(self.next, self.len);
        f.debug_tuple("IterMut").field(&DebugRest(rest)).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return the element of the next node and step forward, or return `None`
    /// at the end of the list.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // SAFETY: `current` is a node of the list, which is borrowed mutably for
        // `'a`, and each node is yielded once.
        unsafe {
            self.next = (*current.as_ptr()).next;
            self.len -= 1;
            Some(&mut (*current.as_ptr()).element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

struct DebugRest<'a, T>(Iter<'a, T>);

impl<'a, T: fmt::Debug + 'a> fmt::Debug for DebugRest<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Builds the list by pushing every element to the back, in order.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
