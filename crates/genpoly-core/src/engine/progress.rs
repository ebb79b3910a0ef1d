//! Progress events emitted while a polymer is being assembled.
//!
//! The workflow never draws anything itself; front ends install a callback and
//! render the events however they like.

/// A single progress notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// A named stage of the build has begun.
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// A countable task has begun; one step per chain.
    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    /// One chain has been placed and connected.
    ChainAssembled {
        chain: usize,
        monomers: usize,
        records: usize,
    },

    /// A recoverable condition worth surfacing to the user, such as an ignored
    /// sequence file.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback. A reporter without a
/// callback discards everything.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
