//! Unified exit codes. Part of the public contract.

pub const SUCCESS: i32 = 0;
pub const RUN_FAILED: i32 = 1; // Shape, backend, or I/O failure mid-run
pub const CONFIG_ERROR: i32 = 2; // Bad mode/provider/credential, before any processing
