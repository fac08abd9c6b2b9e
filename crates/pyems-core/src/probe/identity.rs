//! Probe name allocation

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::ProbeKind;
use crate::constants::PROBE_NAME_SEPARATOR;

/// Source of unique probe names
///
/// Every allocation takes the next ordinal, whatever the kind, so two
/// probes drawn from the same counter never share a name. Ordinals start
/// at 0 and are never reused.
#[derive(Debug, Default)]
pub struct ProbeCounter {
    next: AtomicU64,
}

impl ProbeCounter {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Start counting at `ordinal` instead of 0
    pub const fn starting_at(ordinal: u64) -> Self {
        Self {
            next: AtomicU64::new(ordinal),
        }
    }

    /// Allocate the next name for `kind`, e.g. `v_t_0`
    pub fn next_name(&self, kind: ProbeKind) -> String {
        let ordinal = self.next.fetch_add(1, Ordering::Relaxed);
        let name = format!("{}{}{}", kind.prefix(), PROBE_NAME_SEPARATOR, ordinal);
        debug!(%name, %kind, "probe name allocated");
        name
    }

    /// Ordinal the next allocation will use
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
