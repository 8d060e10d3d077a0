use std::{
    iter::repeat_with,
    ops::{Index, IndexMut},
};

use log::debug;

use crate::{Error, MAX_VECTOR_SIZE, Result, VecValue, likely};

/// A bounded, offset-indexed vector.
///
/// Owns a contiguous buffer of at most [`MAX_VECTOR_SIZE`] elements and
/// addresses it through a configurable start index: public index `i` is
/// valid iff `start_index() <= i < end_index()`, and maps to storage offset
/// `i - start_index()`.
///
/// Vectors are plain values. Clones own independent buffers, equality is
/// structural (start index, length, elements), and dropping a vector
/// releases its buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedVec<T> {
    start: usize,
    data: Vec<T>,
}

impl<T: VecValue> BoundedVec<T> {
    /// Creates a vector of `len` default-initialized elements starting at
    /// public index 0.
    pub fn new(len: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::with_start(len, 0)
    }

    /// Creates a vector of `len` default-initialized elements whose first
    /// public index is `start`.
    pub fn with_start(len: usize, start: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::validate(len, start)?;
        Ok(Self {
            start,
            data: repeat_with(T::default).take(len).collect(),
        })
    }

    /// Creates a vector where every element is a copy of `value`.
    pub fn filled(len: usize, value: T) -> Result<Self> {
        Self::validate(len, 0)?;
        Ok(Self {
            start: 0,
            data: vec![value; len],
        })
    }

    /// Creates a vector starting at public index 0 that adopts `data` as its
    /// buffer.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        Self::validate(data.len(), 0)?;
        Ok(Self { start: 0, data })
    }

    /// Creates a vector starting at public index 0 holding a copy of `slice`.
    pub fn from_slice(slice: &[T]) -> Result<Self> {
        Self::from_vec(slice.to_vec())
    }

    /// Builds a vector from parts already known to satisfy the length and
    /// start index invariants (results of operations on existing vectors).
    #[inline]
    pub(crate) fn from_parts(start: usize, data: Vec<T>) -> Self {
        Self { start, data }
    }

    fn validate(len: usize, start: usize) -> Result<()> {
        if len > MAX_VECTOR_SIZE {
            debug!("Rejected vector: len {len} exceeds max {MAX_VECTOR_SIZE}");
            return Err(Error::LenTooHigh {
                len,
                max: MAX_VECTOR_SIZE,
            });
        }
        if start.checked_add(len).is_none() {
            debug!("Rejected vector: start {start} + len {len} overflows");
            return Err(Error::InvalidStartIndex { start, len });
        }
        Ok(())
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the first valid public index.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Returns the exclusive upper bound of the public index range.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.start + self.len()
    }

    /// Returns true if the public index is within bounds.
    #[inline]
    pub fn has(&self, index: usize) -> bool {
        index >= self.start && index < self.end_index()
    }

    /// Translates a public index into a storage offset.
    /// Every checked access path goes through here.
    #[inline]
    fn offset_of(&self, index: usize) -> Result<usize> {
        if likely(self.has(index)) {
            Ok(index - self.start)
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                start: self.start,
                end: self.end_index(),
            })
        }
    }

    /// Returns a reference to the element at the given public index.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        Ok(&self.data[self.offset_of(index)?])
    }

    /// Returns a mutable reference to the element at the given public index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let offset = self.offset_of(index)?;
        Ok(&mut self.data[offset])
    }

    /// Writes the element at the given public index.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Replaces this vector's length, start index and contents with an
    /// independent copy of `other`'s. The previous buffer is discarded.
    pub fn assign(&mut self, other: &Self) {
        *self = other.clone();
    }

    /// Returns the underlying buffer as a slice, in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the vector, returning its buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Collects clones of all elements, in storage order.
    pub fn collect(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Collects clones of the elements whose public indices fall in
    /// `from..to`. Bounds outside the valid public range are clamped.
    pub fn collect_range(&self, from: usize, to: usize) -> Vec<T> {
        let end = self.end_index();
        let from = from.clamp(self.start, end) - self.start;
        let to = to.clamp(self.start, end) - self.start;
        if from >= to {
            return vec![];
        }
        self.data[from..to].to_vec()
    }
}

impl<T: VecValue> Index<usize> for BoundedVec<T> {
    type Output = T;

    /// Panicking form of [`BoundedVec::get`].
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap()
    }
}

impl<T: VecValue> IndexMut<usize> for BoundedVec<T> {
    /// Panicking form of [`BoundedVec::get_mut`].
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap()
    }
}
