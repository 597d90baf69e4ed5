use crate::{
    animation::ease::Ease,
    foundation::core::{CameraPose, DVec3, Progress},
    foundation::error::{ReelError, ReelResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for DVec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        DVec3::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }
}

impl Lerp for CameraPose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            position: <DVec3 as Lerp>::lerp(&a.position, &b.position, t),
            look_at: <DVec3 as Lerp>::lerp(&a.look_at, &b.look_at, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Progress at which `value` is reached.
    pub at: f64,
    pub value: T,
    /// Ease applied toward the next key.
    #[serde(default = "linear")]
    pub ease: Ease,
}

fn linear() -> Ease {
    Ease::Linear
}

impl<T> Keyframe<T> {
    pub fn new(at: f64, value: T) -> Self {
        Self {
            at,
            value,
            ease: Ease::Linear,
        }
    }
}

/// Piecewise timeline over progress.
///
/// Invariant: at least one key, `at` finite and strictly increasing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline<T> {
    keys: Vec<Keyframe<T>>,
}

impl<T> Timeline<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<Keyframe<T>>) -> ReelResult<Self> {
        if keys.is_empty() {
            return Err(ReelError::config("timeline must have at least one keyframe"));
        }
        if keys.iter().any(|k| !k.at.is_finite()) {
            return Err(ReelError::config("timeline keyframe positions must be finite"));
        }
        if !keys.windows(2).all(|w| w[0].at < w[1].at) {
            return Err(ReelError::config(
                "timeline keyframe positions must be strictly increasing",
            ));
        }
        Ok(Self { keys })
    }

    /// Linear timeline from `(at, value)` stops.
    pub fn linear(stops: impl IntoIterator<Item = (f64, T)>) -> ReelResult<Self> {
        Self::new(
            stops
                .into_iter()
                .map(|(at, value)| Keyframe::new(at, value))
                .collect(),
        )
    }

    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe::new(0.0, value)],
        }
    }

    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    pub fn sample(&self, progress: Progress) -> T {
        self.sample_at(progress.get())
    }

    /// Sample at an arbitrary scalar; clamps to the first/last key outside the keyed range.
    pub fn sample_at(&self, x: f64) -> T {
        match interpolate(x, &self.keys) {
            Some(v) => v,
            // Unreachable for a validated timeline; the first key is the safe answer.
            None => self.keys[0].value.clone(),
        }
    }
}

/// Interpolate `keys` at `x`.
///
/// Clamped at both ends, exact at every key position, `None` only for an empty list. NaN reads
/// as the first key. Does not allocate.
pub fn interpolate<T>(x: f64, keys: &[Keyframe<T>]) -> Option<T>
where
    T: Lerp + Clone,
{
    let first = keys.first()?;
    let last = &keys[keys.len() - 1];
    if x.is_nan() || x <= first.at {
        return Some(first.value.clone());
    }
    if x >= last.at {
        return Some(last.value.clone());
    }

    let idx = keys.partition_point(|k| k.at <= x);
    let a = &keys[idx - 1];
    let b = &keys[idx];
    if x == a.at {
        return Some(a.value.clone());
    }
    let span = b.at - a.at;
    if span <= 0.0 {
        return Some(a.value.clone());
    }

    let t = a.ease.apply((x - a.at) / span);
    Some(T::lerp(&a.value, &b.value, t))
}

impl<'de, T> serde::Deserialize<'de> for Timeline<T>
where
    T: Lerp + Clone + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            keys: Vec<Keyframe<T>>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Timeline::new(raw.keys).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
