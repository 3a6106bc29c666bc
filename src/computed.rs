use crate::{
    access::{Access, ReadOnly, ReadWrite, Readable, Writable, WriteOnly},
    dynamic::{read_guard, write_guard},
    DynProperty, Property, Result,
};
use alloc::boxed::Box;
use core::{fmt, marker::PhantomData};

type Getter<'a, T> = Box<dyn Fn() -> T + 'a>;
type Setter<'a, T> = Box<dyn FnMut(T) + 'a>;

/// A property whose reads and writes are delegated to closures.
///
/// The closures are supplied by the host at construction and may capture
/// anything that outlives `'a`. Which closures are required depends on the
/// access mode:
///
/// - [`Computed::new`] takes a getter and a setter (`ReadWrite`),
/// - [`Computed::read_only`] takes only a getter,
/// - [`Computed::write_only`] takes only a setter.
///
/// A getter must have the signature `Fn() -> T` and a setter `FnMut(T)`;
/// anything else does not compile:
///
/// ```compile_fail
/// use property::Computed;
///
/// // the setter returns a value
/// let p = Computed::new(|| 1u8, |v: u8| v);
/// ```
///
/// ```compile_fail
/// use property::Computed;
///
/// // the getter takes an argument
/// let p = Computed::read_only(|x: u8| x);
/// ```
///
/// ## Example
///
/// ```rust
/// use property::{Computed, Property};
/// use std::cell::Cell;
///
/// let celsius = Cell::new(20.0);
/// let mut fahrenheit = Computed::new(
///     || celsius.get() * 9.0 / 5.0 + 32.0,
///     |f: f64| celsius.set((f - 32.0) * 5.0 / 9.0),
/// );
///
/// assert_eq!(fahrenheit.get(), 68.0);
/// fahrenheit.set(212.0);
/// drop(fahrenheit);
/// assert_eq!(celsius.get(), 100.0);
/// ```
pub struct Computed<'a, T, A: Access = ReadWrite> {
    getter: A::ReadSlot<Getter<'a, T>>,
    setter: A::WriteSlot<Setter<'a, T>>,
    access: PhantomData<A>,
}

/// Constructor functions.
///
/// Each constructor fixes the access mode, so there is exactly one way to
/// build a computed property of a given mode.
impl<'a, T> Computed<'a, T> {
    /// Construct a read-write property from a getter and a setter.
    pub fn new<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn() -> T + 'a,
        S: FnMut(T) + 'a,
    {
        let getter: Getter<'a, T> = Box::new(getter);
        let setter: Setter<'a, T> = Box::new(setter);
        Computed {
            getter,
            setter,
            access: PhantomData,
        }
    }

    /// Construct a read-only property from a getter.
    ///
    /// ```rust
    /// use property::{Computed, Property};
    ///
    /// let answer = Computed::read_only(|| 42);
    /// assert_eq!(answer.get(), 42);
    /// ```
    pub fn read_only<G>(getter: G) -> Computed<'a, T, ReadOnly>
    where
        G: Fn() -> T + 'a,
    {
        let getter: Getter<'a, T> = Box::new(getter);
        Computed {
            getter,
            setter: (),
            access: PhantomData,
        }
    }

    /// Construct a write-only property from a setter.
    ///
    /// ```rust
    /// use property::{Computed, Property};
    /// use std::cell::RefCell;
    ///
    /// let sink = RefCell::new(Vec::new());
    /// let mut input = Computed::write_only(|line: String| sink.borrow_mut().push(line));
    /// input.set("hello".into());
    /// input.set("world".into());
    /// drop(input);
    /// assert_eq!(sink.into_inner(), ["hello", "world"]);
    /// ```
    pub fn write_only<S>(setter: S) -> Computed<'a, T, WriteOnly>
    where
        S: FnMut(T) + 'a,
    {
        let setter: Setter<'a, T> = Box::new(setter);
        Computed {
            getter: (),
            setter,
            access: PhantomData,
        }
    }
}

impl<'a, T, A> Property for Computed<'a, T, A>
where
    A: Access,
{
    type Value = T;
    type Access = A;

    fn get(&self) -> T
    where
        Self::Access: Readable,
    {
        let getter = A::read_slot::<Getter<'a, T>>(&self.getter);
        getter()
    }

    fn set(&mut self, value: T)
    where
        Self::Access: Writable,
    {
        let setter = A::write_slot::<Setter<'a, T>>(&mut self.setter);
        setter(value)
    }
}

impl<'a, T, A> DynProperty<T> for Computed<'a, T, A>
where
    A: Access,
{
    fn try_get(&self) -> Result<T> {
        let getter = read_guard(A::try_read_slot::<Getter<'a, T>>(&self.getter))?;
        Ok(getter())
    }

    fn try_set(&mut self, value: T) -> Result<()> {
        let setter = write_guard(A::try_write_slot::<Setter<'a, T>>(&mut self.setter))?;
        setter(value);
        Ok(())
    }
}

/// Reads the value through the getter and prints it.
impl<'a, T, A> fmt::Display for Computed<'a, T, A>
where
    T: fmt::Display,
    A: Readable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

/// Does not call the getter, only shows the access mode.
impl<'a, T, A> fmt::Debug for Computed<'a, T, A>
where
    A: Access,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Computed").field(&A::MODE).finish()
    }
}
