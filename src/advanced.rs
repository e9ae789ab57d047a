//! Advanced API level for library authors and power users.
//!
//! This module exposes the type-level building blocks behind [`Expected`](crate::Expected).
//! Use these when writing generic code over error lists, or custom containers on the same
//! union storage.

// Tagged union
pub use crate::types::variant::{Alt, Member, Never, Succ, Union, Zero};

// Error-list algebra
pub use crate::types::error_set::{Describe, Embed, ErrorSet, Remap, SubsetOf, UnionOf};

// Diagnostics
pub use crate::types::ErrorVec;

// Normalized codes
pub use crate::types::error_code::{
    FMT_CATEGORY, IO_CATEGORY, PARSE_CATEGORY, SYSTEM_CATEGORY, UTF8_CATEGORY,
};
#[cfg(feature = "std")]
pub use crate::types::error_code::io_kind_value;
