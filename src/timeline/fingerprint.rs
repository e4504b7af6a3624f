use xxhash_rust::xxh3::Xxh3;

use crate::foundation::error::{DemoreelError, DemoreelResult};

const XXH3_SEED: u64 = 0x6de3_7d0a_91c2_b4f7;

/// Stable 128-bit fingerprint of a serialized state vector.
///
/// Equal states always fingerprint equally, which lets a render consumer
/// skip re-rasterizing hold frames (see [`crate::sample_unique`]). The
/// frame index itself is not part of the state, so a still frame matches
/// across time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct StateFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Fingerprint any serializable state.
pub fn fingerprint_state<S: serde::Serialize>(state: &S) -> DemoreelResult<StateFingerprint> {
    let bytes = serde_json::to_vec(state)
        .map_err(|e| DemoreelError::serde(format!("state serialization failed: {e}")))?;
    let mut hasher = Xxh3::with_seed(XXH3_SEED);
    hasher.update(&bytes);
    let digest = hasher.digest128();
    Ok(StateFingerprint {
        hi: (digest >> 64) as u64,
        lo: digest as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Probe {
        opacity: f64,
        visible: bool,
    }

    #[test]
    fn equal_states_fingerprint_equally() {
        let a = Probe {
            opacity: 0.5,
            visible: true,
        };
        let b = Probe {
            opacity: 0.5,
            visible: true,
        };
        assert_eq!(
            fingerprint_state(&a).unwrap(),
            fingerprint_state(&b).unwrap()
        );
    }

    #[test]
    fn differing_states_fingerprint_differently() {
        let a = Probe {
            opacity: 0.5,
            visible: true,
        };
        let b = Probe {
            opacity: 0.25,
            visible: true,
        };
        assert_ne!(
            fingerprint_state(&a).unwrap(),
            fingerprint_state(&b).unwrap()
        );
    }
}
