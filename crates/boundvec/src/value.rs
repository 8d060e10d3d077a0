use std::fmt::Debug;

/// Marker trait for types that can be stored as elements of a
/// [`BoundedVec`](crate::BoundedVec).
///
/// This trait is automatically implemented for any type that satisfies the
/// required bounds. No manual implementation is needed.
pub trait VecValue
where
    Self: Sized + Debug + Clone + 'static,
{
}

impl<T> VecValue for T where T: Sized + Debug + Clone + 'static {}
