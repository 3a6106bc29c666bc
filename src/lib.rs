//! Provides the property types [`Stored`] and [`Computed`], field-like members
//! whose reads and writes go through a programmable path while still behaving
//! like the wrapped value in arithmetic, comparisons and compound assignment.
//!
//! A [`Stored`] property owns its value. A [`Computed`] property delegates to a
//! getter and/or setter closure supplied by the host, which makes it suitable
//! for validation, derived values and views onto other state. Both implement
//! the [`Property`] trait, whose two primitives `get` and `set` everything else
//! is built on.
//!
//! Since not every member should be both readable and writable, each property
//! carries an access mode as its last generic parameter: [`access::ReadWrite`]
//! (the default), [`access::ReadOnly`] or [`access::WriteOnly`]. Reading a
//! write-only property or writing a read-only one does not compile.
//!
//! ```rust
//! use property::{access, Computed, Stored};
//! use std::cell::Cell;
//!
//! struct Thermostat<'a> {
//!     target: Stored<f64>,
//!     reading: Computed<'a, f64, access::ReadOnly>,
//! }
//!
//! let sensor = Cell::new(19.5);
//! let mut thermostat = Thermostat {
//!     target: Stored::new(21.0),
//!     reading: Computed::read_only(|| sensor.get()),
//! };
//!
//! thermostat.target += 0.5;
//! assert!(thermostat.reading < thermostat.target);
//! assert_eq!(&thermostat.target - &thermostat.reading, 2.0);
//!
//! sensor.set(22.0);
//! assert!(thermostat.reading > thermostat.target);
//! ```
//!
//! Properties never duplicate themselves: they implement neither `Clone` nor
//! `Copy`, and assigning one property from another with
//! [`Property::assign_from`] only copies the value through the target's write
//! path.
//!
//! None of the types synchronize access. Compound assignment and the
//! read-modify-write helpers of [`Property`] are a read followed by a write.

#![no_std]

extern crate alloc;

pub use computed::Computed;
pub use dynamic::DynProperty;
pub use error::{AccessError, Result};
pub use property::{One, Property};
pub use stored::Stored;

pub mod access;
mod computed;
mod dynamic;
mod error;
mod ops;
mod property;
mod stored;

#[cfg(test)]
mod tests;
