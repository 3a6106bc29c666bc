//! Allows creating read-only and write-only properties.
//!
//! The access mode of a property is a type parameter, so using a property in a
//! way its mode forbids is a compile error. [`Mode`] mirrors the three marker
//! types at run time for the type-erased [`DynProperty`](crate::DynProperty)
//! interface.

use crate::error::AccessError;

/// Sealed trait that is implemented for the types in this module.
///
/// Besides the run-time [`Mode`], every access mode decides which parts of a
/// property exist at all: a read slot `ReadSlot<F>` is `F` for readable modes
/// and `()` otherwise, and likewise for `WriteSlot<F>`. This lets a property
/// store only the accessors its mode can use.
pub trait Access: Copy + Default + private::Sealed {
    /// Run-time counterpart of this access mode.
    const MODE: Mode;

    /// Holds an `F` if this mode allows reads.
    type ReadSlot<F>;

    /// Holds an `F` if this mode allows writes.
    type WriteSlot<F>;

    /// Borrows the content of a read slot, failing for write-only modes.
    fn try_read_slot<F>(slot: &Self::ReadSlot<F>) -> Result<&F, AccessError>;

    /// Borrows the content of a write slot, failing for read-only modes.
    fn try_write_slot<F>(slot: &mut Self::WriteSlot<F>) -> Result<&mut F, AccessError>;
}

/// Helper trait that is implemented by [`ReadWrite`] and [`ReadOnly`].
pub trait Readable: Access {
    fn read_slot<F>(slot: &Self::ReadSlot<F>) -> &F;
}

/// Helper trait that is implemented by [`ReadWrite`] and [`WriteOnly`].
pub trait Writable: Access {
    fn write_slot<F>(slot: &mut Self::WriteSlot<F>) -> &mut F;
}

/// Zero-sized marker type for allowing both read and write access.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReadWrite;
impl Access for ReadWrite {
    const MODE: Mode = Mode::ReadWrite;
    type ReadSlot<F> = F;
    type WriteSlot<F> = F;

    fn try_read_slot<F>(slot: &F) -> Result<&F, AccessError> {
        Ok(slot)
    }

    fn try_write_slot<F>(slot: &mut F) -> Result<&mut F, AccessError> {
        Ok(slot)
    }
}
impl Readable for ReadWrite {
    fn read_slot<F>(slot: &F) -> &F {
        slot
    }
}
impl Writable for ReadWrite {
    fn write_slot<F>(slot: &mut F) -> &mut F {
        slot
    }
}

/// Zero-sized marker type for allowing only read access.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReadOnly;
impl Access for ReadOnly {
    const MODE: Mode = Mode::ReadOnly;
    type ReadSlot<F> = F;
    type WriteSlot<F> = ();

    fn try_read_slot<F>(slot: &F) -> Result<&F, AccessError> {
        Ok(slot)
    }

    fn try_write_slot<F>(_slot: &mut ()) -> Result<&mut F, AccessError> {
        Err(AccessError::ReadOnly)
    }
}
impl Readable for ReadOnly {
    fn read_slot<F>(slot: &F) -> &F {
        slot
    }
}

/// Zero-sized marker type for allowing only write access.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WriteOnly;
impl Access for WriteOnly {
    const MODE: Mode = Mode::WriteOnly;
    type ReadSlot<F> = ();
    type WriteSlot<F> = F;

    fn try_read_slot<F>(_slot: &()) -> Result<&F, AccessError> {
        Err(AccessError::WriteOnly)
    }

    fn try_write_slot<F>(slot: &mut F) -> Result<&mut F, AccessError> {
        Ok(slot)
    }
}
impl Writable for WriteOnly {
    fn write_slot<F>(slot: &mut F) -> &mut F {
        slot
    }
}

/// The access mode of a property, as a value.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl Mode {
    pub const fn can_read(self) -> bool {
        !matches!(self, Mode::WriteOnly)
    }

    pub const fn can_write(self) -> bool {
        !matches!(self, Mode::ReadOnly)
    }

    /// Fails with [`AccessError::WriteOnly`] if this mode forbids reads.
    ///
    /// ```
    /// use property::access::Mode;
    /// use property::AccessError;
    ///
    /// assert_eq!(Mode::ReadOnly.check_read(), Ok(()));
    /// assert_eq!(Mode::WriteOnly.check_read(), Err(AccessError::WriteOnly));
    /// ```
    pub fn check_read(self) -> Result<(), AccessError> {
        if self.can_read() {
            Ok(())
        } else {
            Err(AccessError::WriteOnly)
        }
    }

    /// Fails with [`AccessError::ReadOnly`] if this mode forbids writes.
    pub fn check_write(self) -> Result<(), AccessError> {
        if self.can_write() {
            Ok(())
        } else {
            Err(AccessError::ReadOnly)
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::ReadWrite {}
    impl Sealed for super::ReadOnly {}
    impl Sealed for super::WriteOnly {}
}
