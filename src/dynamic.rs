//! Type-erased access to properties whose mode is only known at run time.

use crate::Result;
use log::debug;

/// Object-safe view of a property with value type `T`.
///
/// Every [`Stored`](crate::Stored) and [`Computed`](crate::Computed) property
/// implements this trait regardless of its access mode, so properties of
/// different modes can be kept behind one `dyn DynProperty<T>`. The price is
/// that misuse is no longer a compile error: a read of a write-only property
/// returns [`AccessError::WriteOnly`](crate::AccessError::WriteOnly) and a write
/// to a read-only property returns
/// [`AccessError::ReadOnly`](crate::AccessError::ReadOnly). Rejected calls never
/// touch the storage or the closures.
///
/// ```rust
/// use property::{access, AccessError, Computed, DynProperty, Stored};
///
/// let mut fields: Vec<Box<dyn DynProperty<u32>>> = vec![
///     Box::new(Stored::new(1u32)),
///     Box::new(Stored::new_restricted(access::ReadOnly, 2u32)),
///     Box::new(Computed::write_only(|_: u32| {})),
/// ];
///
/// assert_eq!(fields[1].try_get(), Ok(2));
/// assert_eq!(fields[1].try_set(5), Err(AccessError::ReadOnly));
/// assert_eq!(fields[2].try_get(), Err(AccessError::WriteOnly));
/// assert_eq!(fields[0].try_set(5), Ok(()));
/// ```
pub trait DynProperty<T> {
    /// Reads the current value if the access mode permits it.
    fn try_get(&self) -> Result<T>;

    /// Writes `value` if the access mode permits it.
    fn try_set(&mut self, value: T) -> Result<()>;
}

/// Passes through the outcome of a read check, logging rejections.
pub(crate) fn read_guard<R>(check: Result<R>) -> Result<R> {
    check.inspect_err(|err| debug!("Rejected property read: {err}."))
}

/// Passes through the outcome of a write check, logging rejections.
pub(crate) fn write_guard<R>(check: Result<R>) -> Result<R> {
    check.inspect_err(|err| debug!("Rejected property write: {err}."))
}
