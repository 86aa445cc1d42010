//! Stable seeds for the mock variance model.
//!
//! The seed is a content hash of the domain tag and the canonical filter
//! snapshot, so identical runs reproduce identical numbers within and across
//! sessions. Wall-clock time never enters the model.

use sha2::{Digest, Sha256};

use crate::model::{FilterValues, RangeBound};

/// Compute the variance seed for a filter snapshot.
///
/// The snapshot is fed to SHA-256 field by field in a fixed order
/// (selections are already sorted), and the first eight digest bytes become
/// the seed.
pub fn seed_for(filters: &FilterValues) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(filters.domain.as_str().as_bytes());

    match &filters.range {
        Some(RangeBound::Dates { from, to }) => {
            hasher.update(b"dates");
            update_opt(&mut hasher, from.map(|d| d.to_string()));
            update_opt(&mut hasher, to.map(|d| d.to_string()));
        }
        Some(RangeBound::Periods { from, to }) => {
            hasher.update(b"periods");
            update_opt(&mut hasher, from.clone());
            update_opt(&mut hasher, to.clone());
        }
        None => hasher.update(b"unbounded"),
    }

    for (field, values) in &filters.selections {
        hasher.update(b"\x1f");
        hasher.update(field.as_bytes());
        for value in values {
            hasher.update(b"\x1e");
            hasher.update(value.as_bytes());
        }
    }

    let digest = hasher.finalize();
    u64::from_be_bytes(digest[..8].try_into().expect("digest is 32 bytes"))
}

fn update_opt(hasher: &mut Sha256, value: Option<String>) {
    match value {
        Some(v) => {
            hasher.update(b"\x02");
            hasher.update(v.as_bytes());
        }
        None => hasher.update(b"\x00"),
    }
}
