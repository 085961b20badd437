use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::error::{Result, StError};

/// 共享底层序列的只读视图，切片为 O(1)，不复制数据。
///
/// A view is `(owner, start, stop)`; every view derived from it through
/// [`SubSeq::slice`] keeps the same owner alive via the shared `Arc`.
/// Equality and ordering compare the viewed elements, not the bounds.
#[derive(Clone)]
pub struct SubSeq<T> {
    data: Arc<[T]>,
    start: usize,
    stop: usize,
}

impl<T> SubSeq<T> {
    /// View over the whole owner.
    pub fn new(data: Arc<[T]>) -> Self {
        let stop = data.len();
        Self { data, start: 0, stop }
    }

    /// View over `data[start..stop]`.
    pub fn with_bounds(data: Arc<[T]>, start: usize, stop: usize) -> Result<Self> {
        if start > stop || stop > data.len() {
            return Err(StError::IndexOutOfRange { start, stop, len: data.len() });
        }
        Ok(Self { data, start, stop })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Offset of the view's first element in the owner.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the view's last element in the owner.
    #[inline]
    pub fn stop(&self) -> usize {
        self.stop
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[self.start..self.stop]
    }

    pub fn owner(&self) -> &Arc<[T]> {
        &self.data
    }

    /// True if both views borrow from the same allocation.
    pub fn shares_owner(&self, other: &SubSeq<T>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Bounds-checked element access.
    pub fn get(&self, idx: usize) -> Result<&T> {
        if idx >= self.len() {
            return Err(StError::IndexOutOfRange { start: idx, stop: idx + 1, len: self.len() });
        }
        Ok(&self.data[self.start + idx])
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Sub-view `[start, stop)` relative to this view, sharing the owner.
    pub fn slice(&self, start: usize, stop: usize) -> Result<Self> {
        if start > stop || stop > self.len() {
            return Err(StError::IndexOutOfRange { start, stop, len: self.len() });
        }
        Ok(Self {
            data: Arc::clone(&self.data),
            start: self.start + start,
            stop: self.start + stop,
        })
    }

    /// `self[..k]`
    pub fn prefix(&self, k: usize) -> Result<Self> {
        self.slice(0, k)
    }

    /// `self[k..]`
    pub fn suffix(&self, k: usize) -> Result<Self> {
        self.slice(k, self.len())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: PartialEq> SubSeq<T> {
    /// Length of the longest common prefix of the view and `other`.
    pub fn common_prefix_len(&self, other: &[T]) -> usize {
        self.iter().zip(other).take_while(|(a, b)| a == b).count()
    }
}

impl<T> From<Vec<T>> for SubSeq<T> {
    fn from(v: Vec<T>) -> Self {
        Self::new(v.into())
    }
}

impl<T> Index<usize> for SubSeq<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        &self.as_slice()[idx]
    }
}

impl<'a, T> IntoIterator for &'a SubSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SubSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for SubSeq<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq> Eq for SubSeq<T> {}

impl<T: PartialOrd> PartialOrd for SubSeq<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SubSeq<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for SubSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubSeq[{}..{}]{:?}", self.start, self.stop, self.as_slice())
    }
}
