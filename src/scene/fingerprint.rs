use xxhash_rust::xxh3::Xxh3;

use crate::{choreo::choreographer::ChoreoFrame, foundation::core::DVec3};

const XXH3_SEED: u64 = 0x5c0e_11a7_d0c4_e2b9;

/// Stable 128-bit digest of a [`ChoreoFrame`].
///
/// Two frames share a fingerprint exactly when every derived value is bitwise equal, so it can
/// stand in for the frame when checking determinism or comparing scroll paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_frame(frame: &ChoreoFrame) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_f64(frame.progress.get());

    match frame.active.index {
        Some(i) => {
            h.write_u8(1);
            h.write_u64(i as u64);
        }
        None => h.write_u8(0),
    }
    h.write_f64(frame.active.local_t);
    h.write_f64(frame.focus);

    h.write_vec3(frame.camera.position);
    h.write_vec3(frame.camera.look_at);
    h.write_vec3(frame.root_rotation);

    h.write_u64(frame.layer_y.len() as u64);
    for &y in &frame.layer_y {
        h.write_f64(y);
    }

    h.write_f64(frame.readout.bar);
    h.write_f64(frame.readout.title_opacity);
    h.write_f64(frame.readout.hint_opacity);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_u8(&mut self, v: u8) {
        self.inner.update(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.inner.update(&v.to_le_bytes());
    }

    // -0.0 and 0.0 hash apart; frames built from the same progress never differ that way.
    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_vec3(&mut self, v: DVec3) {
        self.write_f64(v.x);
        self.write_f64(v.y);
        self.write_f64(v.z);
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
