//! High-level interface to the AD9832
//!
//! The entry point to this API is the [UninitializedAD9832] struct. Attaching
//! to the chip with [`UninitializedAD9832::init`] programs it into a known
//! state and gives you an [AD9832], which has the operations.
//!
//! This module implements a high-level interface to the AD9832. This is the
//! recommended way to access the AD9832 using this crate, unless you need the
//! greater flexibility provided by the [word-level interface].
//!
//! [word-level interface]: ../ll/index.html

use crate::ll;
use core::fmt;

pub use attributes::*;
pub use control::*;
pub use error::*;
pub use uninitialized::*;

mod attributes;
mod control;
mod error;
mod ready;
mod uninitialized;

/// Entry point to the AD9832 driver API
///
/// The chip's control registers can't be read back, so this struct keeps a
/// copy of what was last written to them. The copy is only updated after the
/// write went through. If the bus fails, the copy keeps the previous value,
/// while the chip may or may not have taken the new one. Repeat the operation
/// to get both back in line.
///
/// Methods take `&mut self`, so one instance can't be driven from two places
/// at once. Don't share the bus with another driver of the same chip.
pub struct AD9832<B> {
    ll: ll::AD9832<B>,
    control: ControlRegisters,
}

// Can't be derived without putting requirements on `B`.
impl<B> fmt::Debug for AD9832<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AD9832 {{ control: {:?}, .. }}", self.control)
    }
}
