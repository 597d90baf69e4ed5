use crate::{
    animation::keyframes::Timeline,
    foundation::core::Progress,
    foundation::error::ReelResult,
};

/// Scene chrome driven directly by progress: the headline, the scroll hint and the progress bar.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChromeTimelines {
    pub title_opacity: Timeline<f64>,
    pub hint_opacity: Timeline<f64>,
}

impl ChromeTimelines {
    /// Headline fades out over the first 15%; the hint hides after 10% and returns for the last 10%.
    pub fn standard() -> ReelResult<Self> {
        Ok(Self {
            title_opacity: Timeline::linear([(0.0, 1.0), (0.15, 0.0)])?,
            hint_opacity: Timeline::linear([(0.0, 1.0), (0.1, 0.0), (0.9, 0.0), (1.0, 1.0)])?,
        })
    }

    pub fn sample(&self, progress: Progress) -> Readout {
        Readout {
            bar: progress.get(),
            title_opacity: self.title_opacity.sample(progress),
            hint_opacity: self.hint_opacity.sample(progress),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Readout {
    /// Progress bar fill in `[0, 1]`.
    pub bar: f64,
    pub title_opacity: f64,
    pub hint_opacity: f64,
}

impl Readout {
    pub fn percent(&self) -> f64 {
        self.bar * 100.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/readout.rs"]
mod tests;
