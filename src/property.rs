use core::ops::{Add, Index, Sub};

use crate::access::{self, Readable, Writable};

/// A field-like handle whose reads and writes go through `get` and `set`.
///
/// Implementors only provide the two primitives. Everything else a property
/// can do (assignment that yields the written value, read-modify-write
/// updates, increments, element access, and the operator impls in this
/// crate) is expressed in terms of them.
///
/// Read paths require `Self::Access: Readable` and write paths require
/// `Self::Access: Writable`, so using a property against its access mode does
/// not compile:
///
/// ```compile_fail
/// use property::{Property, Stored, access};
///
/// let mut read_only = Stored::new_restricted(access::ReadOnly, 1u32);
/// read_only.set(5); // -> compile error
/// ```
///
/// ```compile_fail
/// use property::{Computed, Property};
///
/// let write_only = Computed::write_only(|_value: u32| {});
/// write_only.get(); // -> compile error
/// ```
///
/// Properties are neither `Clone` nor `Copy`. Use
/// [`assign_from`][Property::assign_from] to copy the *value* of one property
/// into another:
///
/// ```compile_fail
/// use property::Stored;
///
/// let a = Stored::new(1);
/// let b: Stored<i32> = a.clone(); // -> compile error, `clone` yields the `i32`
/// ```
pub trait Property {
    /// The type of the wrapped value.
    type Value;

    /// The access mode, one of the marker types in [`access`].
    type Access: access::Access;

    /// Reads the current value.
    fn get(&self) -> Self::Value
    where
        Self::Access: Readable;

    /// Writes a new value.
    fn set(&mut self, value: Self::Value)
    where
        Self::Access: Writable;

    /// Writes `value` and returns it, like an assignment expression.
    ///
    /// ```rust
    /// use property::{Property, Stored};
    ///
    /// let mut width = Stored::new(0u64);
    /// assert_eq!(width.assign(12u32), 12);
    /// assert_eq!(width.get(), 12);
    /// ```
    fn assign<V>(&mut self, value: V) -> Self::Value
    where
        V: Into<Self::Value>,
        Self::Value: Clone,
        Self::Access: Writable,
    {
        let value = value.into();
        self.set(value.clone());
        value
    }

    /// Writes the current value of `other` through this property's write path.
    ///
    /// The two properties stay independent: `self` keeps its own storage or
    /// closures and `other` is only read.
    fn assign_from<P>(&mut self, other: &P) -> Self::Value
    where
        P: Property<Value = Self::Value>,
        P::Access: Readable,
        Self::Value: Clone,
        Self::Access: Writable,
    {
        self.assign(other.get())
    }

    /// Reads the value, passes it to `f` and writes the result back.
    ///
    /// Returns the new value. This is a read followed by a write, not an
    /// atomic operation.
    ///
    /// ```rust
    /// use property::{Property, Stored};
    ///
    /// let mut value = Stored::new(21u32);
    /// assert_eq!(value.update(|v| v * 2), 42);
    /// assert_eq!(value.get(), 42);
    /// ```
    fn update<F>(&mut self, f: F) -> Self::Value
    where
        F: FnOnce(Self::Value) -> Self::Value,
        Self::Value: Clone,
        Self::Access: Readable + Writable,
    {
        let new = f(self.get());
        self.assign(new)
    }

    /// Adds one and returns the updated value (`++x`).
    fn pre_increment(&mut self) -> Self::Value
    where
        Self::Value: Add<Output = Self::Value> + One + Clone,
        Self::Access: Readable + Writable,
    {
        self.update(|value| value + One::one())
    }

    /// Adds one and returns the value from before the update (`x++`).
    ///
    /// ```rust
    /// use property::{Property, Stored};
    ///
    /// let mut counter = Stored::new(7i32);
    /// assert_eq!(counter.post_increment(), 7);
    /// assert_eq!(counter.get(), 8);
    /// ```
    fn post_increment(&mut self) -> Self::Value
    where
        Self::Value: Add<Output = Self::Value> + One + Clone,
        Self::Access: Readable + Writable,
    {
        let previous = self.get();
        self.set(previous.clone() + One::one());
        previous
    }

    /// Subtracts one and returns the updated value (`--x`).
    fn pre_decrement(&mut self) -> Self::Value
    where
        Self::Value: Sub<Output = Self::Value> + One + Clone,
        Self::Access: Readable + Writable,
    {
        self.update(|value| value - One::one())
    }

    /// Subtracts one and returns the value from before the update (`x--`).
    fn post_decrement(&mut self) -> Self::Value
    where
        Self::Value: Sub<Output = Self::Value> + One + Clone,
        Self::Access: Readable + Writable,
    {
        let previous = self.get();
        self.set(previous.clone() - One::one());
        previous
    }

    /// Reads the value and returns a copy of the element at `index`.
    ///
    /// There is no write-through counterpart; to change an element, read the
    /// whole value, modify it and write it back with [`update`][Property::update].
    ///
    /// ```rust
    /// use property::{Computed, Property};
    ///
    /// let primes = Computed::read_only(|| vec![2, 3, 5, 7]);
    /// assert_eq!(primes.element(2), 5);
    /// ```
    fn element<I>(&self, index: I) -> <Self::Value as Index<I>>::Output
    where
        Self::Value: Index<I>,
        <Self::Value as Index<I>>::Output: Clone,
        Self::Access: Readable,
    {
        self.get()[index].clone()
    }
}

/// The unit step used by the increment and decrement operations.
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_one {
    ($one:literal => $($t:ty),+) => {
        $(
            impl One for $t {
                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_one!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_one!(1.0 => f32, f64);
