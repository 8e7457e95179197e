//! Result payload of a [`SqlWriter`](crate::SqlWriter).
//!
//! Older writers reported either a success flag or the number of bytes they
//! wrote (with zero or a missing value meaning nothing was written). The
//! variants keep that payload, and [`WriteOutcome::is_success`] turns it into
//! the boolean every caller of a [`QueryWriter`](crate::QueryWriter) expects.

/// What a SQL writer reported after a non-erroring write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Explicit success
    Success,
    /// Explicit failure, or no payload at all
    Failure,
    /// Number of bytes written
    BytesWritten(usize),
}

impl WriteOutcome {
    /// Normalize to a strict boolean.
    ///
    /// Only `Success` and a non-zero byte count are truthy.
    pub fn is_success(self) -> bool {
        match self {
            WriteOutcome::Success => true,
            WriteOutcome::Failure => false,
            WriteOutcome::BytesWritten(n) => n > 0,
        }
    }
}

impl From<bool> for WriteOutcome {
    fn from(ok: bool) -> Self {
        if ok {
            WriteOutcome::Success
        } else {
            WriteOutcome::Failure
        }
    }
}

impl From<usize> for WriteOutcome {
    fn from(bytes: usize) -> Self {
        WriteOutcome::BytesWritten(bytes)
    }
}

impl From<Option<usize>> for WriteOutcome {
    fn from(bytes: Option<usize>) -> Self {
        bytes.map_or(WriteOutcome::Failure, WriteOutcome::BytesWritten)
    }
}

impl From<WriteOutcome> for bool {
    fn from(outcome: WriteOutcome) -> bool {
        outcome.is_success()
    }
}
