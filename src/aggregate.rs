//! Sheet-group aggregation with an optional fixed-seed sampling cap.
//!
//! Groups concatenate in source order. Past the cap, membership is decided
//! by a uniform fixed-seed sample rather than prefix truncation, so no
//! sheet is favored by read order; the constant seed keeps repeated queries
//! against unchanged data reproducible.

use rand::RngCore;
use rand::seq::index;
use tracing::info;

use crate::data::{ProgramRecord, SheetGroup};
use crate::normalize::normalize_row;

/// Small deterministic RNG (splitmix64) used for reproducible cap sampling.
#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Result of one aggregation pass.
#[derive(Clone, Debug)]
pub struct AggregateOutcome {
    /// Normalized records in aggregate order (post-sampling when capped).
    pub records: Vec<ProgramRecord>,
    /// True when the cap dropped records. Informational: callers surface it
    /// to the user, it is never an error.
    pub truncated: bool,
}

/// Concatenate `groups` in source order, normalizing each row via
/// [`normalize_row`].
///
/// When `cap` is set and the combined count exceeds it, exactly `cap`
/// records survive, chosen by a fixed-seed uniform sample; survivors keep
/// their relative aggregate order so page windows stay stable for unchanged
/// data. Empty input yields an empty outcome, never an error.
pub fn aggregate(groups: &[SheetGroup], cap: Option<usize>, seed: u64) -> AggregateOutcome {
    let records: Vec<ProgramRecord> = groups
        .iter()
        .flat_map(|group| group.rows.iter().map(normalize_row))
        .collect();

    let total = records.len();
    let Some(cap) = cap else {
        return AggregateOutcome {
            records,
            truncated: false,
        };
    };
    if total <= cap {
        return AggregateOutcome {
            records,
            truncated: false,
        };
    }

    let mut rng = DeterministicRng::new(seed);
    let mut keep = index::sample(&mut rng, total, cap).into_vec();
    keep.sort_unstable();
    let sampled: Vec<ProgramRecord> = keep.into_iter().map(|idx| records[idx].clone()).collect();
    info!(total, cap, "aggregated set exceeded cap; sampled down");
    AggregateOutcome {
        records: sampled,
        truncated: true,
    }
}
