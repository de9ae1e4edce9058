/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss, together with the
/// tolerance comparison and gcd used by the value model.
pub mod num;
