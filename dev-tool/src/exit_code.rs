pub const NO_ERROR: i32 = 0;
pub const NON_FATAL_ERROR: i32 = 1;
pub const FATAL_ERROR: i32 = 2;
