/// Strategy computing one component's weight from its squared distance to the
/// evaluation point. Weight derivation is kernel-family-specific, so the
/// composition step calls through this seam instead of hard-coding a formula.
pub trait WeightStrategy: Send + Sync {
    fn weight(&self, squared_distance: f64, dimension: usize, sigma: f64) -> f64;
}

/// The standard Gaussian-like falloff: `exp(-d^2 / (2 n sigma^2)) / d`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianWeights;

impl WeightStrategy for GaussianWeights {
    fn weight(&self, squared_distance: f64, dimension: usize, sigma: f64) -> f64 {
        let falloff =
            (-squared_distance / (2.0 * dimension as f64 * sigma * sigma)).exp();
        falloff / squared_distance.sqrt()
    }
}

/// Per-component blend parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentMix {
    pub sigma: f64,
    pub lambda: f64,
    pub bias: f64,
}

impl ComponentMix {
    fn value(&self, raw: f64) -> f64 {
        self.lambda * raw + self.bias
    }
}

/// Blends raw kernel values into one scalar:
/// `sum(w_i * (lambda_i * raw_i + bias_i)) / sum(w_i)`.
///
/// An input sitting exactly on a component's shift point short-circuits to
/// that component's value; this keeps the transformed optimum exact instead of
/// dividing an infinite weight through the blend.
pub fn compose(
    raw_values: &[f64],
    squared_distances: &[f64],
    mixes: &[ComponentMix],
    dimension: usize,
    strategy: &dyn WeightStrategy,
) -> f64 {
    assert_eq!(raw_values.len(), squared_distances.len());
    assert_eq!(raw_values.len(), mixes.len());
    assert!(!raw_values.is_empty(), "composition needs at least one component");

    if let Some(hit) = squared_distances.iter().position(|&d| d == 0.0) {
        return mixes[hit].value(raw_values[hit]);
    }

    let weights: Vec<f64> = squared_distances
        .iter()
        .zip(mixes)
        .map(|(&d, mix)| strategy.weight(d, dimension, mix.sigma))
        .collect();

    if let Some(hit) = weights.iter().position(|w| !w.is_finite()) {
        return mixes[hit].value(raw_values[hit]);
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        // Every component is effectively at infinite distance; blend evenly.
        let count = raw_values.len() as f64;
        return raw_values
            .iter()
            .zip(mixes)
            .map(|(&raw, mix)| mix.value(raw))
            .sum::<f64>()
            / count;
    }

    weights
        .iter()
        .zip(raw_values)
        .zip(mixes)
        .map(|((&w, &raw), mix)| w * mix.value(raw))
        .sum::<f64>()
        / total
}
