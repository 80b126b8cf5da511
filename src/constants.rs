/// Capacity used when an `IntSet` is named without an explicit bound
pub const DEFAULT_MAX_SIZE: usize = 10;

/// Separator written between members by `IntSet::dump` and `Display`
pub const DUMP_SEPARATOR: &str = "  ";
