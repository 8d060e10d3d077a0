use std::{
    iter::Sum,
    ops::{Add, Mul, Sub},
};

use log::debug;

use crate::{BoundedVec, Error, Result, VecValue, unlikely};

/// Underflow-checked subtraction for element types that support it.
pub trait CheckedSub<Rhs = Self>: Sized {
    fn checked_sub(self, rhs: Rhs) -> Option<Self>;
}

macro_rules! impl_checked_sub {
    ($($t:ty)*) => ($(
        impl CheckedSub for $t {
            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }
        }
    )*)
}

impl_checked_sub! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

/// Arithmetic over bounded vectors.
///
/// Every operation leaves its operands untouched and returns a fresh result
/// carrying `self`'s start index. Binary operations require both operands to
/// have the same length and fail with [`Error::LenMismatch`] otherwise.
impl<T: VecValue> BoundedVec<T> {
    fn map(&self, f: impl Fn(&T) -> T) -> Self {
        Self::from_parts(self.start_index(), self.as_slice().iter().map(f).collect())
    }

    fn zip_map(&self, other: &Self, f: impl Fn(&T, &T) -> T) -> Result<Self> {
        self.ensure_same_len(other)?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Self::from_parts(self.start_index(), data))
    }

    fn ensure_same_len(&self, other: &Self) -> Result<()> {
        if unlikely(self.len() != other.len()) {
            debug!(
                "Rejected binary operation: len {} vs {}",
                self.len(),
                other.len()
            );
            return Err(Error::LenMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Adds `rhs` to every element.
    pub fn add_scalar(&self, rhs: T) -> Self
    where
        T: Copy + Add<Output = T>,
    {
        self.map(|v| *v + rhs)
    }

    /// Subtracts `rhs` from every element.
    pub fn sub_scalar(&self, rhs: T) -> Self
    where
        T: Copy + Sub<Output = T>,
    {
        self.map(|v| *v - rhs)
    }

    /// Subtracts `rhs` from every element, returning `None` if any
    /// subtraction underflows.
    pub fn checked_sub_scalar(&self, rhs: T) -> Option<Self>
    where
        T: Copy + CheckedSub,
    {
        let data = self
            .as_slice()
            .iter()
            .copied()
            .map(|v| v.checked_sub(rhs))
            .collect::<Option<Vec<T>>>()?;
        Some(Self::from_parts(self.start_index(), data))
    }

    /// Multiplies every element by `rhs`.
    pub fn mul_scalar(&self, rhs: T) -> Self
    where
        T: Copy + Mul<Output = T>,
    {
        self.map(|v| *v * rhs)
    }

    /// Element-wise addition.
    pub fn add(&self, other: &Self) -> Result<Self>
    where
        T: Copy + Add<Output = T>,
    {
        self.zip_map(other, |a, b| *a + *b)
    }

    /// Element-wise subtraction.
    pub fn sub(&self, other: &Self) -> Result<Self>
    where
        T: Copy + Sub<Output = T>,
    {
        self.zip_map(other, |a, b| *a - *b)
    }

    /// Inner product: multiplies corresponding elements and sums the
    /// products into a single scalar.
    pub fn dot(&self, other: &Self) -> Result<T>
    where
        T: Copy + Mul<Output = T> + Sum,
    {
        self.ensure_same_len(other)?;
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| *a * *b)
            .sum())
    }

    /// Sums all elements.
    pub fn sum(&self) -> T
    where
        T: Copy + Sum,
    {
        self.as_slice().iter().copied().sum()
    }
}
