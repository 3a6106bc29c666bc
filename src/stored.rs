use crate::{
    access::{Access, ReadWrite, Readable, Writable, WriteOnly},
    dynamic::{read_guard, write_guard},
    DynProperty, Property, Result,
};
use core::{fmt, marker::PhantomData, mem, ops::Deref};

/// A property that owns its value.
///
/// `get` returns a copy of the stored value and `set` replaces it. Besides
/// the copying read, readable stored properties support a *borrowing* read
/// through [`Deref`] and the *consuming* read [`into_inner`][Stored::into_inner].
/// Read-write properties can also move their value out with
/// [`take`][Stored::take] or [`replace`][Stored::replace], which count as a
/// write as well as a read.
///
/// Writing never needs `T: Clone`, only the copying `get` does.
///
/// The access mode is restricted through the optional second generic parameter
/// `A`, one of [`ReadWrite`] (the default), [`ReadOnly`][crate::access::ReadOnly]
/// or [`WriteOnly`].
///
/// Note that `Stored` does not synchronize anything: the read-modify-write
/// operations of [`Property`] and the compound assignment operators are a read
/// followed by a write.
#[derive(Default)]
pub struct Stored<T, A = ReadWrite> {
    value: T,
    access: PhantomData<A>,
}

impl<T> Stored<T> {
    /// Construct a new stored property holding the given value.
    ///
    /// The returned property allows read and write operations. Use
    /// [`new_restricted`][Stored::new_restricted] to create read-only
    /// properties and [`write_only`][Stored::write_only] for write-only ones.
    ///
    /// Calling `Stored::new(v)` is equivalent to calling
    /// `Stored::new_restricted(access::ReadWrite, v)`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use property::{Property, Stored};
    ///
    /// let mut value = Stored::new(0u32);
    /// assert_eq!(value.get(), 0);
    /// value.set(42);
    /// assert_eq!(value.get(), 42);
    /// value += 2;
    /// assert_eq!(value, 44);
    /// ```
    pub const fn new(value: T) -> Self {
        Stored::new_restricted(ReadWrite, value)
    }

    /// Construct a new stored property with restricted access, holding the given
    /// initial value.
    ///
    /// ## Examples
    ///
    /// ```
    /// use property::{access, Property, Stored};
    ///
    /// let mut read_write = Stored::new_restricted(access::ReadWrite, 0u32);
    /// read_write.set(100);
    /// read_write.update(|v| v / 2);
    /// assert_eq!(read_write.get(), 50);
    ///
    /// let read_only = Stored::new_restricted(access::ReadOnly, 7u32);
    /// assert_eq!(read_only.get(), 7);
    /// ```
    ///
    /// A write-only property has no observable initial value, so passing one
    /// does not compile:
    ///
    /// ```compile_fail
    /// # use property::{Stored, access};
    /// let write_only = Stored::new_restricted(access::WriteOnly, 0u32); // -> compile error
    /// ```
    pub const fn new_restricted<A>(access: A, value: T) -> Stored<T, A>
    where
        A: Readable,
    {
        let _ = access;
        Stored {
            value,
            access: PhantomData,
        }
    }
}

impl<T> Stored<T, WriteOnly> {
    /// Construct a write-only stored property.
    ///
    /// The slot starts out as `T::default()`, which can never be read back.
    ///
    /// ```rust
    /// use property::{Property, Stored};
    ///
    /// let mut secret = Stored::<String, _>::write_only();
    /// secret.set("hunter2".into());
    /// ```
    ///
    /// ```compile_fail
    /// # use property::{Property, Stored};
    /// let secret = Stored::<u32, _>::write_only();
    /// secret.get(); // -> compile error
    /// ```
    pub fn write_only() -> Stored<T, WriteOnly>
    where
        T: Default,
    {
        Stored {
            value: T::default(),
            access: PhantomData,
        }
    }
}

impl<T, A> Stored<T, A> {
    /// Replaces the stored value.
    ///
    /// This is the write path behind [`Property::set`], available for any `T`.
    ///
    /// ```rust
    /// use property::Stored;
    ///
    /// struct Token(u32);
    ///
    /// let mut token = Stored::new(Token(1));
    /// token.set(Token(2));
    /// assert_eq!(token.0, 2);
    /// ```
    pub fn set(&mut self, value: T)
    where
        A: Writable,
    {
        self.value = value;
    }

    /// Writes `value` and returns the previous value.
    pub fn replace(&mut self, value: T) -> T
    where
        A: Readable + Writable,
    {
        mem::replace(&mut self.value, value)
    }

    /// Moves the value out, leaving `T::default()` in its place.
    ///
    /// ```rust
    /// use property::{Property, Stored};
    ///
    /// let mut name = Stored::new(String::from("ferris"));
    /// assert_eq!(name.take(), "ferris");
    /// assert_eq!(name.get(), "");
    /// ```
    ///
    /// Taking changes the stored value, so read-only properties can't do it:
    ///
    /// ```compile_fail
    /// # use property::{access, Stored};
    /// let mut name = Stored::new_restricted(access::ReadOnly, String::from("ferris"));
    /// name.take(); // -> compile error
    /// ```
    pub fn take(&mut self) -> T
    where
        A: Readable + Writable,
        T: Default,
    {
        mem::take(&mut self.value)
    }

    /// Consumes the property and returns the stored value.
    pub fn into_inner(self) -> T
    where
        A: Readable,
    {
        self.value
    }
}

impl<T, A> Property for Stored<T, A>
where
    T: Clone,
    A: Access,
{
    type Value = T;
    type Access = A;

    fn get(&self) -> T
    where
        Self::Access: Readable,
    {
        self.value.clone()
    }

    fn set(&mut self, value: T)
    where
        Self::Access: Writable,
    {
        Stored::set(self, value);
    }
}

impl<T, A> DynProperty<T> for Stored<T, A>
where
    T: Clone,
    A: Access,
{
    fn try_get(&self) -> Result<T> {
        read_guard(A::MODE.check_read())?;
        Ok(self.value.clone())
    }

    fn try_set(&mut self, value: T) -> Result<()> {
        write_guard(A::MODE.check_write())?;
        self.value = value;
        Ok(())
    }
}

/// Borrowing read of the stored value.
impl<T, A> Deref for Stored<T, A>
where
    A: Readable,
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, A> AsRef<T> for Stored<T, A>
where
    A: Readable,
{
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Creates a readable property with the given initial value.
impl<T, A> From<T> for Stored<T, A>
where
    A: Readable,
{
    fn from(value: T) -> Self {
        Stored {
            value,
            access: PhantomData,
        }
    }
}

/// Prints the stored value, unless the property is write-only.
impl<T, A> fmt::Debug for Stored<T, A>
where
    T: fmt::Debug,
    A: Access,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Stored");
        if A::MODE.can_read() {
            tuple.field(&self.value);
        } else {
            tuple.field(&format_args!("<write-only>"));
        }
        tuple.finish()
    }
}

impl<T, A> fmt::Display for Stored<T, A>
where
    T: fmt::Display,
    A: Readable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
