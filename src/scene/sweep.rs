use rayon::prelude::*;

use crate::{
    choreo::choreographer::ChoreoFrame,
    foundation::core::Progress,
    foundation::error::{ReelError, ReelResult},
    scene::{
        fingerprint::{FrameFingerprint, fingerprint_frame},
        model::SceneConfig,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct SweepSample {
    pub index: usize,
    pub frame: ChoreoFrame,
    pub fingerprint: FrameFingerprint,
}

/// `samples` evenly spaced progress values from `0` to `1` inclusive.
pub fn sample_points(samples: usize) -> ReelResult<Vec<Progress>> {
    match samples {
        0 => Err(ReelError::config("sweep needs at least one sample")),
        1 => Ok(vec![Progress::START]),
        n => Ok((0..n)
            .map(|i| Progress::new(i as f64 / (n - 1) as f64))
            .collect()),
    }
}

/// Evaluate `config` at `samples` evenly spaced progress values, in parallel.
///
/// Output is ordered by sample index and identical for any thread count.
#[tracing::instrument(skip(config), fields(scene = %config.name))]
pub fn sweep(config: &SceneConfig, samples: usize) -> ReelResult<Vec<SweepSample>> {
    let choreo = config.choreographer()?;
    let points = sample_points(samples)?;
    let out: Vec<SweepSample> = points
        .par_iter()
        .enumerate()
        .map(|(index, &p)| {
            let frame = choreo.evaluate(p);
            let fingerprint = fingerprint_frame(&frame);
            SweepSample {
                index,
                frame,
                fingerprint,
            }
        })
        .collect();
    tracing::debug!(samples = out.len(), "sweep done");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sweep.rs"]
mod tests;
