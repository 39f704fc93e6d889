use std::ops::{Add, Sub};

use super::Vector;
use crate::alloc::Allocator;
use crate::util::error::SizeMismatch;

/// Two Vectors are equal if they both own an allocation, have the same length and all
/// corresponding elements are equal.
///
/// Note that this means Vectors without any allocation (`cap == 0`) are never equal to anything,
/// including each other. For this reason, Vector doesn't implement [`Eq`].
///
/// # Examples
/// ```
/// # use sequence_lib::collections::contiguous::Vector;
/// let strs = Vector::from(["Hello", "World"]);
/// let mut copy = strs.clone();
/// assert_eq!(strs, copy);
/// copy.push_back("World2");
/// assert_ne!(strs, copy);
///
/// assert_ne!(Vector::<u8>::new(), Vector::<u8>::new());
/// ```
impl<T, A, B> PartialEq<Vector<T, B>> for Vector<T, A>
where
    T: PartialEq,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Vector<T, B>) -> bool {
        if self.cap == 0 || other.cap == 0 { return false; }

        **self == **other
    }
}

impl<T: Clone, A: Allocator + Clone> Vector<T, A> {
    /// Combines self and `other` element by element using `op`, producing a new Vector in self's
    /// allocator.
    ///
    /// # Errors
    /// Returns [`SizeMismatch`] if the two Vectors have different lengths.
    pub fn zip_with<B, F>(
        &self,
        other: &Vector<T, B>,
        mut op: F,
    ) -> Result<Vector<T, A>, SizeMismatch>
    where
        B: Allocator,
        F: FnMut(T, T) -> T,
    {
        if self.len != other.len {
            return Err(SizeMismatch { left: self.len, right: other.len });
        }

        let mut result = Vector::with_cap_in(self.len, self.alloc.clone());

        for (l, r) in self.iter().zip(other.iter()) {
            // SAFETY: result has capacity for exactly self.len elements, which is the length of
            // the zipped iterator.
            unsafe { result.push_unchecked(op(l.clone(), r.clone())); }
        }

        Ok(result)
    }
}

/// Element-wise addition.
///
/// # Examples
/// ```
/// # use sequence_lib::collections::contiguous::Vector;
/// let sum = (&Vector::from([1, 2, 3]) + &Vector::from([10, 20, 30])).unwrap();
/// assert_eq!(&*sum, &[11, 22, 33]);
/// assert!((&Vector::from([1]) + &Vector::from([1, 2])).is_err());
/// ```
impl<T, A, B> Add<&Vector<T, B>> for &Vector<T, A>
where
    T: Clone + Add<Output = T>,
    A: Allocator + Clone,
    B: Allocator,
{
    type Output = Result<Vector<T, A>, SizeMismatch>;

    fn add(self, rhs: &Vector<T, B>) -> Self::Output {
        self.zip_with(rhs, T::add)
    }
}

/// Element-wise subtraction.
///
/// # Examples
/// ```
/// # use sequence_lib::collections::contiguous::Vector;
/// let diff = (&Vector::from([5, 5]) - &Vector::from([2, 7])).unwrap();
/// assert_eq!(&*diff, &[3, -2]);
/// ```
impl<T, A, B> Sub<&Vector<T, B>> for &Vector<T, A>
where
    T: Clone + Sub<Output = T>,
    A: Allocator + Clone,
    B: Allocator,
{
    type Output = Result<Vector<T, A>, SizeMismatch>;

    fn sub(self, rhs: &Vector<T, B>) -> Self::Output {
        self.zip_with(rhs, T::sub)
    }
}
