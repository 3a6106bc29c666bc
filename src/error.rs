use thiserror::Error;

pub type Result<T, E = AccessError> = core::result::Result<T, E>;

/// A read or write that the property's access mode does not permit.
///
/// Only returned by the type-erased [`DynProperty`](crate::DynProperty)
/// interface. The typed API rejects the same operations at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("property is write-only and cannot be read")]
    WriteOnly,

    #[error("property is read-only and cannot be written")]
    ReadOnly,
}
