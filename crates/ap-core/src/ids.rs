//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! Two families share the macro:
//!
//! - **Positional** ids (`FlightId`, `PassengerId`) index directly into a
//!   `Vec` (the flight list of a `RunConfig` or the passenger arena of a
//!   trace).  `PassengerId` is the identity handle: two passengers with
//!   identical attributes still have distinct ids.
//! - **Configured** ids (`CounterId`, `CheckpointId`, `HoldRoomId`) are the
//!   stable numbers shown to operators ("Counter 3").  They are *not* list
//!   positions; the list position is what aligns a config with its line in
//!   the per-interval history.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID", equal to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of a flight in `RunConfig::flights`.
    pub struct FlightId(u32);
}

typed_id! {
    /// Slot of a passenger in the trace's passenger arena.
    pub struct PassengerId(u32);
}

typed_id! {
    /// Configured id of a ticket counter.
    pub struct CounterId(u32);
}

typed_id! {
    /// Configured id of a security checkpoint.
    pub struct CheckpointId(u32);
}

typed_id! {
    /// Configured id of a hold room (gate lounge).
    pub struct HoldRoomId(u32);
}
