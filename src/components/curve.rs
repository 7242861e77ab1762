use serde::{Deserialize, Serialize};

/// A scalar response of an airfoil to angle of attack (degrees in, coefficient out).
pub trait ResponseCurve: Send + Sync {
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> ResponseCurve for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// How values between two keys are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Linear,
    /// Hold the value of the key on the left.
    Constant,
}

/// Piecewise curve through `(input, value)` keys.
///
/// Inputs outside the key range evaluate to the first or last value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyframeCurve {
    pub keys: Vec<(f64, f64)>,
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl KeyframeCurve {
    /// Creates a linearly interpolated curve; keys are sorted by input.
    pub fn from_keys(keys: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut keys: Vec<(f64, f64)> = keys.into_iter().collect();
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            keys,
            interpolation: Interpolation::Linear,
        }
    }

    /// A curve returning `value` for every input.
    pub fn constant(value: f64) -> Self {
        Self::from_keys([(0.0, value)])
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Checks that the curve has keys, finite values and strictly increasing inputs.
    pub fn validate(&self) -> Result<(), String> {
        if self.keys.is_empty() {
            return Err("curve has no keys".to_string());
        }
        if let Some((x, y)) = self
            .keys
            .iter()
            .find(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(format!("curve key ({}, {}) is not finite", x, y));
        }
        if let Some(pair) = self.keys.windows(2).find(|pair| pair[1].0 <= pair[0].0) {
            return Err(format!(
                "curve inputs must be strictly increasing, found {} after {}",
                pair[1].0, pair[0].0
            ));
        }
        Ok(())
    }
}

impl ResponseCurve for KeyframeCurve {
    fn evaluate(&self, x: f64) -> f64 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };

        // NaN compares false against every key
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }

        // first.0 < x < last.0, so 1 <= upper < len
        let upper = self.keys.partition_point(|&(kx, _)| kx <= x);
        let (x0, y0) = self.keys[upper - 1];
        let (x1, y1) = self.keys[upper];

        match self.interpolation {
            Interpolation::Constant => y0,
            Interpolation::Linear => {
                let span = x1 - x0;
                if span <= 0.0 {
                    y0
                } else {
                    y0 + (y1 - y0) * (x - x0) / span
                }
            }
        }
    }
}
