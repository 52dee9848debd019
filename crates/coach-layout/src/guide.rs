#![forbid(unsafe_code)]

//! Identifiers for intermediate guide lines.
//!
//! A connection to the spot with a non-zero margin is resolved through a
//! guide line placed `margin` away from the spot edge. Guides are named from
//! a namespace owned by the overlay so hosts that build real constraint
//! graphs can refer to them.

use std::fmt;

use crate::connection::Axis;

/// Identifier of a guide line. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuideId(u32);

impl GuideId {
    /// Lowest valid identifier.
    pub const MIN: Self = Self(1);

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guide#{}", self.0)
    }
}

/// Monotonic allocator of [`GuideId`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideIds {
    next: u32,
}

impl GuideIds {
    pub const fn new() -> Self {
        Self {
            next: GuideId::MIN.0,
        }
    }

    /// Allocate the next identifier. Wraps back to [`GuideId::MIN`] instead
    /// of producing zero.
    pub fn allocate(&mut self) -> GuideId {
        let id = GuideId(self.next);
        self.next = self.next.checked_add(1).unwrap_or(GuideId::MIN.0);
        id
    }
}

impl Default for GuideIds {
    fn default() -> Self {
        Self::new()
    }
}

/// A guide line created while resolving a connection.
///
/// `begin` is measured from the top of the screen for vertical guides and
/// from the start side for horizontal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guide {
    pub id: GuideId,
    pub axis: Axis,
    pub begin: i32,
}
