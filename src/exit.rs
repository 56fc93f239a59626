// src/exit.rs
//! Standardized process exit codes for `walkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WalkrankExit {
    /// Ranking completed successfully.
    Success = 0,
    /// Runtime failure during computation (e.g. dangling node, I/O).
    Error = 1,
    /// Input validation failed (malformed record, bad configuration).
    InvalidInput = 2,
}

impl WalkrankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for WalkrankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&RankError> for WalkrankExit {
    fn from(e: &RankError) -> Self {
        match e {
            RankError::Parse { .. } | RankError::Config(_) => Self::InvalidInput,
            RankError::DanglingNode(_) | RankError::Io { .. } => Self::Error,
        }
    }
}
