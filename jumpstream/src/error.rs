use std::fmt;

use serde::{Deserialize, Serialize};

/// Failures reported by stream construction and jump-ahead operations.
///
/// Each variant maps to a stable negative integer code; [`errmsg`] produces
/// the message for a raw code, including codes that never surface as a
/// variant (`0`, warnings).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Error {
    /// Allocating the handle or its per-stream states failed.
    Allocation,
    /// Allocating the jump-ahead polynomial workspace failed.
    JumpAllocation,
    /// The requested step exceeds [`MAX_STEP`](crate::MAX_STEP).
    StepTooLarge,
    /// The numeric generator id does not name a known generator.
    UnknownGenerator,
}

impl Error {
    /// The stable integer code for this error; always negative.
    pub const fn code(self) -> i32 {
        match self {
            Error::Allocation => -1,
            Error::JumpAllocation => -2,
            Error::StepTooLarge => -3,
            Error::UnknownGenerator => -4,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(errmsg(self.code()))
    }
}

impl std::error::Error for Error {}

/// Non-fatal conditions reported alongside a successful operation.
///
/// Warnings carry positive codes and are not sticky: each seeding operation
/// overwrites the previous warning state of the handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Warning {
    /// The seed was zero; the default seed `1` was substituted.
    ZeroSeed,
}

impl Warning {
    /// The stable integer code for this warning; always positive.
    pub const fn code(self) -> i32 {
        match self {
            Warning::ZeroSeed => 1,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(errmsg(self.code()))
    }
}

/// Message for a raw status code: `0` for success, negative for errors,
/// positive for warnings.
pub const fn errmsg(code: i32) -> &'static str {
    match code {
        0 => "no error",
        -1 => "failed to allocate memory for the random number generator",
        -2 => "failed to allocate memory for jumping ahead",
        -3 => "the step size for jumping ahead is too large",
        -4 => "the type of the random number generator is undefined",
        1 => "invalid seed value",
        _ => "undefined error code",
    }
}
