//! Strongly typed, zero-cost wrappers for task identity and priority.
//!
//! Both are `Copy + Ord + Hash` so they can be used as map keys and compared
//! without ceremony.  The inner integer is `pub`; callers that need the raw
//! value may use `.get()` for clarity.

use std::fmt;

/// Generate a typed wrapper around a signed integer.
macro_rules! typed_int {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The zero value; also what `Default` returns.
            pub const ZERO: $name = $name(0);

            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(v: $name) -> $inner {
                v.0
            }
        }
    };
}

typed_int! {
    /// Identifier of a task.  Unique among the tasks a scheduler holds.
    pub struct TaskId(i64);
}

typed_int! {
    /// Scheduling priority.  Larger values are served first.
    pub struct Priority(i64);
}
