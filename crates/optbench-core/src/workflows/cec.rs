use crate::core::kernels::{self, FnKernel};
use crate::engine::bias::function_bias;
use crate::engine::composition::{ComponentMix, GaussianWeights};
use crate::engine::config::{EvalConfig, MissingDataPolicy};
use crate::engine::error::ProblemError;
use crate::engine::layout::SuiteVersion;
use crate::engine::problem::{
    CompositionComponent, CompositionSpec, HybridPart, HybridSpec, Problem, SingleSpec,
    TransformSpec,
};
use crate::engine::store::{AuxiliaryDataStore, DataLoadError, LoadedBuffer};
use nalgebra::DMatrix;
use std::sync::Arc;
use tracing::warn;

// Per-kernel shrink rates: the factor mapping the search domain onto each
// kernel's native range, applied between shift and rotation.
const RATE_UNIT: f64 = 1.0;
const RATE_ROSENBROCK: f64 = 2.048 / 100.0;
const RATE_RASTRIGIN: f64 = 5.12 / 100.0;
const RATE_LEVY: f64 = 5.12 / 100.0;
const RATE_SCHAFFER_F7: f64 = 0.5 / 100.0;
const RATE_SCHWEFEL: f64 = 1000.0 / 100.0;
const RATE_GRIEWANK: f64 = 600.0 / 100.0;
const RATE_HGBAT: f64 = 5.0 / 100.0;
const RATE_HAPPY_CAT: f64 = 5.0 / 100.0;
const RATE_KATSUURA: f64 = 5.0 / 100.0;
const RATE_GRIEWANK_ROSENBROCK: f64 = 5.0 / 100.0;
const RATE_LUNACEK: f64 = 600.0 / 100.0;

/// One hybrid chunk: kernel, share of the dimension, shrink rate.
type HybridEntry = (FnKernel, f64, f64);
/// One composition component: kernel, sigma, lambda, bias, shrink rate.
type CompositionEntry = (FnKernel, f64, f64, f64, f64);

enum FunctionDef {
    Single(FnKernel, f64),
    Hybrid(&'static [HybridEntry]),
    Composition(&'static [CompositionEntry]),
}

const CEC2021_H5: [HybridEntry; 3] = [
    (kernels::SCHWEFEL, 0.3, RATE_SCHWEFEL),
    (kernels::RASTRIGIN, 0.3, RATE_RASTRIGIN),
    (kernels::ELLIPTIC, 0.4, RATE_UNIT),
];
const CEC2021_H6: [HybridEntry; 4] = [
    (kernels::EXPANDED_SCHAFFER_F6, 0.2, RATE_UNIT),
    (kernels::HGBAT, 0.2, RATE_HGBAT),
    (kernels::ROSENBROCK, 0.3, RATE_ROSENBROCK),
    (kernels::SCHWEFEL, 0.3, RATE_SCHWEFEL),
];
const CEC2021_H7: [HybridEntry; 5] = [
    (kernels::EXPANDED_SCHAFFER_F6, 0.1, RATE_UNIT),
    (kernels::HGBAT, 0.2, RATE_HGBAT),
    (kernels::ROSENBROCK, 0.2, RATE_ROSENBROCK),
    (kernels::SCHWEFEL, 0.2, RATE_SCHWEFEL),
    (kernels::ELLIPTIC, 0.3, RATE_UNIT),
];
const CEC2021_C8: [CompositionEntry; 3] = [
    (kernels::RASTRIGIN, 10.0, 1.0, 0.0, RATE_RASTRIGIN),
    (kernels::GRIEWANK, 20.0, 10.0, 100.0, RATE_GRIEWANK),
    (kernels::SCHWEFEL, 30.0, 1.0, 200.0, RATE_SCHWEFEL),
];
const CEC2021_C9: [CompositionEntry; 4] = [
    (kernels::ACKLEY, 10.0, 10.0, 0.0, RATE_UNIT),
    (kernels::ELLIPTIC, 20.0, 1e-6, 100.0, RATE_UNIT),
    (kernels::GRIEWANK, 30.0, 10.0, 200.0, RATE_GRIEWANK),
    (kernels::RASTRIGIN, 40.0, 1.0, 300.0, RATE_RASTRIGIN),
];
const CEC2021_C10: [CompositionEntry; 5] = [
    (kernels::RASTRIGIN, 10.0, 10.0, 0.0, RATE_RASTRIGIN),
    (kernels::HAPPY_CAT, 20.0, 1.0, 100.0, RATE_HAPPY_CAT),
    (kernels::ACKLEY, 30.0, 10.0, 200.0, RATE_UNIT),
    (kernels::DISCUS, 40.0, 1e-6, 300.0, RATE_UNIT),
    (kernels::ROSENBROCK, 50.0, 1.0, 400.0, RATE_ROSENBROCK),
];

const CEC2022_H6: [HybridEntry; 3] = [
    (kernels::BENT_CIGAR, 0.4, RATE_UNIT),
    (kernels::HGBAT, 0.4, RATE_HGBAT),
    (kernels::RASTRIGIN, 0.2, RATE_RASTRIGIN),
];
const CEC2022_H7: [HybridEntry; 6] = [
    (kernels::HGBAT, 0.1, RATE_HGBAT),
    (kernels::KATSUURA, 0.2, RATE_KATSUURA),
    (kernels::ACKLEY, 0.2, RATE_UNIT),
    (kernels::RASTRIGIN, 0.2, RATE_RASTRIGIN),
    (kernels::SCHWEFEL, 0.1, RATE_SCHWEFEL),
    (kernels::SCHAFFER_F7, 0.2, RATE_SCHAFFER_F7),
];
const CEC2022_H8: [HybridEntry; 5] = [
    (kernels::KATSUURA, 0.3, RATE_KATSUURA),
    (kernels::HAPPY_CAT, 0.2, RATE_HAPPY_CAT),
    (kernels::GRIEWANK_ROSENBROCK, 0.2, RATE_GRIEWANK_ROSENBROCK),
    (kernels::SCHWEFEL, 0.1, RATE_SCHWEFEL),
    (kernels::ACKLEY, 0.2, RATE_UNIT),
];
const CEC2022_C9: [CompositionEntry; 5] = [
    (kernels::ROSENBROCK, 10.0, 1.0, 0.0, RATE_ROSENBROCK),
    (kernels::ELLIPTIC, 20.0, 1e-6, 200.0, RATE_UNIT),
    (kernels::BENT_CIGAR, 30.0, 1e-6, 300.0, RATE_UNIT),
    (kernels::DISCUS, 40.0, 1e-6, 100.0, RATE_UNIT),
    (kernels::ELLIPTIC, 50.0, 1e-6, 400.0, RATE_UNIT),
];
const CEC2022_C10: [CompositionEntry; 3] = [
    (kernels::SCHWEFEL, 20.0, 1.0, 0.0, RATE_SCHWEFEL),
    (kernels::RASTRIGIN, 10.0, 1.0, 200.0, RATE_RASTRIGIN),
    (kernels::HGBAT, 10.0, 1.0, 100.0, RATE_HGBAT),
];
const CEC2022_C11: [CompositionEntry; 5] = [
    (kernels::EXPANDED_SCHAFFER_F6, 20.0, 5e-4, 0.0, RATE_UNIT),
    (kernels::SCHWEFEL, 20.0, 1.0, 200.0, RATE_SCHWEFEL),
    (kernels::GRIEWANK, 30.0, 10.0, 300.0, RATE_GRIEWANK),
    (kernels::ROSENBROCK, 30.0, 1.0, 400.0, RATE_ROSENBROCK),
    (kernels::RASTRIGIN, 20.0, 10.0, 200.0, RATE_RASTRIGIN),
];
const CEC2022_C12: [CompositionEntry; 6] = [
    (kernels::HGBAT, 10.0, 10.0, 0.0, RATE_HGBAT),
    (kernels::RASTRIGIN, 20.0, 10.0, 300.0, RATE_RASTRIGIN),
    (kernels::SCHWEFEL, 30.0, 2.5, 500.0, RATE_SCHWEFEL),
    (kernels::BENT_CIGAR, 40.0, 1e-26, 100.0, RATE_UNIT),
    (kernels::ELLIPTIC, 50.0, 1e-6, 400.0, RATE_UNIT),
    (kernels::EXPANDED_SCHAFFER_F6, 60.0, 5e-4, 200.0, RATE_UNIT),
];

fn function_def(version: SuiteVersion, function_id: u32) -> Option<FunctionDef> {
    use FunctionDef::{Composition, Hybrid, Single};
    let def = match (version, function_id) {
        (SuiteVersion::Cec2021, 1) => Single(kernels::BENT_CIGAR, RATE_UNIT),
        (SuiteVersion::Cec2021, 2) => Single(kernels::SCHWEFEL, RATE_SCHWEFEL),
        (SuiteVersion::Cec2021, 3) => Single(kernels::LUNACEK_BI_RASTRIGIN, RATE_LUNACEK),
        (SuiteVersion::Cec2021, 4) => {
            Single(kernels::GRIEWANK_ROSENBROCK, RATE_GRIEWANK_ROSENBROCK)
        }
        (SuiteVersion::Cec2021, 5) => Hybrid(&CEC2021_H5),
        (SuiteVersion::Cec2021, 6) => Hybrid(&CEC2021_H6),
        (SuiteVersion::Cec2021, 7) => Hybrid(&CEC2021_H7),
        (SuiteVersion::Cec2021, 8) => Composition(&CEC2021_C8),
        (SuiteVersion::Cec2021, 9) => Composition(&CEC2021_C9),
        (SuiteVersion::Cec2021, 10) => Composition(&CEC2021_C10),

        (SuiteVersion::Cec2022, 1) => Single(kernels::ZAKHAROV, RATE_UNIT),
        (SuiteVersion::Cec2022, 2) => Single(kernels::ROSENBROCK, RATE_ROSENBROCK),
        (SuiteVersion::Cec2022, 3) => Single(kernels::SCHAFFER_F7, RATE_SCHAFFER_F7),
        (SuiteVersion::Cec2022, 4) => Single(kernels::RASTRIGIN, RATE_RASTRIGIN),
        (SuiteVersion::Cec2022, 5) => Single(kernels::LEVY, RATE_LEVY),
        (SuiteVersion::Cec2022, 6) => Hybrid(&CEC2022_H6),
        (SuiteVersion::Cec2022, 7) => Hybrid(&CEC2022_H7),
        (SuiteVersion::Cec2022, 8) => Hybrid(&CEC2022_H8),
        (SuiteVersion::Cec2022, 9) => Composition(&CEC2022_C9),
        (SuiteVersion::Cec2022, 10) => Composition(&CEC2022_C10),
        (SuiteVersion::Cec2022, 11) => Composition(&CEC2022_C11),
        (SuiteVersion::Cec2022, 12) => Composition(&CEC2022_C12),
        _ => return None,
    };
    Some(def)
}

/// Builds a continuous benchmark problem.
///
/// Auxiliary data is loaded through `store` and shared across problems; the
/// configured [`MissingDataPolicy`] decides whether missing or short data
/// disables the corresponding transform or fails construction.
pub fn create_problem(
    version: SuiteVersion,
    function_id: u32,
    instance: u32,
    dimension: usize,
    store: &mut AuxiliaryDataStore,
    config: &EvalConfig,
) -> Result<Problem, ProblemError> {
    if dimension == 0 {
        return Err(ProblemError::InvalidDimension {
            dimension,
            context: "continuous problems",
        });
    }
    let def = function_def(version, function_id).ok_or(ProblemError::UnknownFunction {
        version,
        function_id,
    })?;
    let bias = if config.apply_bias {
        function_bias(version, function_id).unwrap_or(0.0)
    } else {
        0.0
    };
    let name = format!("{version}_f{function_id:02}");

    let spec = match def {
        FunctionDef::Single(kernel, scale_rate) => {
            let shift = load_shift(store, config, version, function_id, dimension, dimension)?;
            let rotation = load_rotation(store, config, version, function_id, dimension)?
                .map(|buffer| matrix_block(&buffer, 0, dimension))
                .flatten();
            TransformSpec::Single(SingleSpec {
                kernel: Box::new(kernel),
                shift,
                rotation,
                scale_rate,
            })
        }
        FunctionDef::Hybrid(entries) => {
            let shift = load_shift(store, config, version, function_id, dimension, dimension)?;
            let rotation = load_rotation(store, config, version, function_id, dimension)?
                .map(|buffer| matrix_block(&buffer, 0, dimension))
                .flatten();
            let shuffle = load_shuffle(store, config, version, function_id, dimension)?;
            let parts = partition(entries, dimension)?;
            TransformSpec::Hybrid(HybridSpec {
                shift,
                rotation,
                shuffle,
                parts,
            })
        }
        FunctionDef::Composition(entries) => {
            let required = entries.len() * dimension;
            let shift = load_shift(store, config, version, function_id, dimension, required)?;
            let rotation = load_rotation(store, config, version, function_id, dimension)?;

            let mut components = Vec::with_capacity(entries.len());
            for (index, &(kernel, sigma, lambda, comp_bias, scale_rate)) in
                entries.iter().enumerate()
            {
                let comp_shift = match &shift {
                    Some(buffer) => buffer.values[index * dimension..(index + 1) * dimension]
                        .to_vec(),
                    None => vec![0.0; dimension],
                };
                let comp_rotation = rotation
                    .as_ref()
                    .and_then(|buffer| matrix_block(buffer, index, dimension));
                components.push(CompositionComponent {
                    kernel: Box::new(kernel),
                    shift: comp_shift,
                    rotation: comp_rotation,
                    scale_rate,
                    mix: ComponentMix {
                        sigma,
                        lambda,
                        bias: comp_bias,
                    },
                });
            }
            TransformSpec::Composition(CompositionSpec {
                components,
                strategy: Box::new(GaussianWeights),
            })
        }
    };

    Ok(Problem::new(
        name,
        version,
        function_id,
        instance,
        dimension,
        spec,
        bias,
    ))
}

/// Loads shift data with at least `required` values, applying the
/// missing-data policy to unavailable or short files.
fn load_shift(
    store: &mut AuxiliaryDataStore,
    config: &EvalConfig,
    version: SuiteVersion,
    function_id: u32,
    dimension: usize,
    required: usize,
) -> Result<Option<Arc<LoadedBuffer<f64>>>, ProblemError> {
    match store.shift(version, function_id, dimension) {
        Ok(buffer) if buffer.values.len() >= required => Ok(Some(buffer)),
        Ok(buffer) => short_data(config, version, function_id, "shift", required, buffer.values.len()),
        Err(error) => missing_data(config, version, function_id, "shift", error),
    }
}

fn load_rotation(
    store: &mut AuxiliaryDataStore,
    config: &EvalConfig,
    version: SuiteVersion,
    function_id: u32,
    dimension: usize,
) -> Result<Option<Arc<LoadedBuffer<f64>>>, ProblemError> {
    let required = dimension * dimension;
    match store.rotation(version, function_id, dimension) {
        Ok(buffer) if buffer.values.len() >= required => Ok(Some(buffer)),
        Ok(buffer) => {
            short_data(config, version, function_id, "rotation", required, buffer.values.len())
        }
        Err(error) => missing_data(config, version, function_id, "rotation", error),
    }
}

/// Loads the shuffle permutation, rebasing the file's 1-based indices.
/// The policy fallback is the identity permutation.
fn load_shuffle(
    store: &mut AuxiliaryDataStore,
    config: &EvalConfig,
    version: SuiteVersion,
    function_id: u32,
    dimension: usize,
) -> Result<Vec<usize>, ProblemError> {
    let loaded = match store.shuffle(version, function_id, dimension) {
        Ok(buffer) if buffer.values.len() >= dimension => Some(buffer),
        Ok(buffer) => {
            short_data(config, version, function_id, "shuffle", dimension, buffer.values.len())?
        }
        Err(error) => missing_data(config, version, function_id, "shuffle", error)?,
    };
    match loaded {
        Some(buffer) => buffer.values[..dimension]
            .iter()
            .map(|&index| {
                index
                    .checked_sub(1)
                    .filter(|&rebased| rebased < dimension)
                    .ok_or(ProblemError::InvalidShuffleIndex { index, dimension })
            })
            .collect(),
        None => Ok((0..dimension).collect()),
    }
}

fn short_data<T>(
    config: &EvalConfig,
    version: SuiteVersion,
    function_id: u32,
    kind: &'static str,
    required: usize,
    actual: usize,
) -> Result<Option<T>, ProblemError> {
    if config.missing_data == MissingDataPolicy::IdentityFallback {
        warn!(%version, function_id, kind, required, actual, "short auxiliary data; transform disabled");
        Ok(None)
    } else {
        Err(ProblemError::TruncatedData {
            kind,
            version,
            function_id,
            required,
            actual,
        })
    }
}

fn missing_data<T>(
    config: &EvalConfig,
    version: SuiteVersion,
    function_id: u32,
    kind: &'static str,
    error: DataLoadError,
) -> Result<Option<T>, ProblemError> {
    match error {
        DataLoadError::Unavailable { .. }
            if config.missing_data == MissingDataPolicy::IdentityFallback =>
        {
            warn!(%version, function_id, kind, "auxiliary data unavailable; transform disabled");
            Ok(None)
        }
        other => Err(other.into()),
    }
}

/// Extracts the `index`-th `dim x dim` row-major block, if fully present.
fn matrix_block(
    buffer: &LoadedBuffer<f64>,
    index: usize,
    dimension: usize,
) -> Option<DMatrix<f64>> {
    let size = dimension * dimension;
    let start = index * size;
    let end = start + size;
    if buffer.values.len() < end {
        return None;
    }
    Some(DMatrix::from_row_slice(
        dimension,
        dimension,
        &buffer.values[start..end],
    ))
}

/// Splits the dimension into consecutive chunks following the published
/// proportions; the last chunk absorbs the remainder.
fn partition(entries: &[HybridEntry], dimension: usize) -> Result<Vec<HybridPart>, ProblemError> {
    let mut parts = Vec::with_capacity(entries.len());
    let mut used = 0usize;
    for (index, &(kernel, proportion, scale_rate)) in entries.iter().enumerate() {
        let length = if index + 1 == entries.len() {
            dimension.saturating_sub(used)
        } else {
            ((proportion * dimension as f64).ceil() as usize).max(1)
        };
        used += length;
        if length == 0 || used > dimension {
            return Err(ProblemError::InvalidDimension {
                dimension,
                context: "hybrid chunk partition",
            });
        }
        parts.push(HybridPart {
            kernel: Box::new(kernel),
            length,
            scale_rate,
        });
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::EvalConfig;
    use std::fmt::Write as _;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_data(root: &Path, version: SuiteVersion, name: &str, content: &str) {
        let dir = root.join(version.dir_tag());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    fn identity_blocks(dimension: usize, blocks: usize) -> String {
        let mut content = String::new();
        for _ in 0..blocks {
            for row in 0..dimension {
                for col in 0..dimension {
                    let value = if row == col { 1.0 } else { 0.0 };
                    write!(content, "{value} ").unwrap();
                }
                content.push('\n');
            }
        }
        content
    }

    fn counting_shift(total: usize) -> String {
        (0..total)
            .map(|i| format!("{:.2}", 0.25 * (i % 7) as f64))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn identity_shuffle(dimension: usize) -> String {
        (1..=dimension)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Writes a complete fixture set for one function.
    fn write_function_data(
        root: &Path,
        version: SuiteVersion,
        function_id: u32,
        dimension: usize,
        blocks: usize,
    ) {
        write_data(
            root,
            version,
            &format!("shift_data_{function_id}.txt"),
            &counting_shift(blocks * dimension),
        );
        write_data(
            root,
            version,
            &format!("M_{function_id}_D{dimension}.txt"),
            &identity_blocks(dimension, blocks),
        );
        if version.is_shuffled(function_id) {
            write_data(
                root,
                version,
                &format!("shuffle_data_{function_id}_D{dimension}.txt"),
                &identity_shuffle(dimension),
            );
        }
    }

    fn config_for(root: &Path) -> EvalConfig {
        EvalConfig::builder().data_root(root).build().unwrap()
    }

    #[test]
    fn shifted_function_reproduces_the_kernel_value_plus_bias() {
        let dir = tempdir().unwrap();
        write_data(dir.path(), SuiteVersion::Cec2022, "shift_data_1.txt", "1.0 -1.0");
        write_data(dir.path(), SuiteVersion::Cec2022, "M_1_D2.txt", "1 0 0 1");
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = config_for(dir.path());

        let problem =
            create_problem(SuiteVersion::Cec2022, 1, 1, 2, &mut store, &config).unwrap();

        // At the shift point the kernel sees the origin, so the objective is
        // exactly the configured bias.
        let value = problem.evaluate(&[1.0, -1.0]).unwrap();
        assert!((value - 300.0).abs() < 1e-9);
        assert_eq!(problem.optimum().x, vec![1.0, -1.0]);
        assert!((problem.optimum().y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn every_wired_function_has_a_self_consistent_optimum() {
        let dimension = 10;
        let dir = tempdir().unwrap();
        let versions: [(SuiteVersion, u32); 2] =
            [(SuiteVersion::Cec2021, 10), (SuiteVersion::Cec2022, 12)];

        for (version, max_id) in versions {
            for function_id in 1..=max_id {
                let blocks = version.component_count(function_id).unwrap();
                write_function_data(dir.path(), version, function_id, dimension, blocks);
            }
        }

        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = config_for(dir.path());
        for (version, max_id) in versions {
            for function_id in 1..=max_id {
                let problem = create_problem(
                    version,
                    function_id,
                    1,
                    dimension,
                    &mut store,
                    &config,
                )
                .unwrap_or_else(|e| panic!("{version} f{function_id}: {e}"));

                let optimum = problem.optimum().clone();
                assert!(optimum.y.is_finite());
                let value = problem.evaluate(&optimum.x).unwrap();
                let scale = optimum.y.abs().max(1.0);
                assert!(
                    ((value - optimum.y) / scale).abs() < 1e-8,
                    "{version} f{function_id}: {value} != {}",
                    optimum.y
                );
            }
        }
    }

    #[test]
    fn unknown_functions_are_rejected() {
        let dir = tempdir().unwrap();
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = config_for(dir.path());

        assert!(matches!(
            create_problem(SuiteVersion::Cec2014, 1, 1, 10, &mut store, &config),
            Err(ProblemError::UnknownFunction { function_id: 1, .. })
        ));
        assert!(matches!(
            create_problem(SuiteVersion::Cec2022, 13, 1, 10, &mut store, &config),
            Err(ProblemError::UnknownFunction { function_id: 13, .. })
        ));
    }

    #[test]
    fn missing_data_fails_construction_under_the_default_policy() {
        let dir = tempdir().unwrap();
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = config_for(dir.path());

        let result = create_problem(SuiteVersion::Cec2022, 1, 1, 2, &mut store, &config);
        assert!(matches!(result, Err(ProblemError::Data { .. })));
    }

    #[test]
    fn identity_fallback_disables_the_missing_transforms() {
        let dir = tempdir().unwrap();
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = EvalConfig::builder()
            .data_root(dir.path())
            .missing_data(MissingDataPolicy::IdentityFallback)
            .build()
            .unwrap();

        let problem =
            create_problem(SuiteVersion::Cec2022, 1, 1, 2, &mut store, &config).unwrap();
        assert_eq!(problem.optimum().x, vec![0.0, 0.0]);
        let value = problem.evaluate(&[0.0, 0.0]).unwrap();
        assert!((value - 300.0).abs() < 1e-9);
    }

    #[test]
    fn short_shift_data_is_reported_under_the_default_policy() {
        let dir = tempdir().unwrap();
        write_data(dir.path(), SuiteVersion::Cec2022, "shift_data_1.txt", "1.0");
        write_data(dir.path(), SuiteVersion::Cec2022, "M_1_D2.txt", "1 0 0 1");
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = config_for(dir.path());

        let result = create_problem(SuiteVersion::Cec2022, 1, 1, 2, &mut store, &config);
        assert!(matches!(
            result,
            Err(ProblemError::TruncatedData {
                kind: "shift",
                required: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn bias_can_be_disabled_per_configuration() {
        let dir = tempdir().unwrap();
        write_data(dir.path(), SuiteVersion::Cec2022, "shift_data_1.txt", "1.0 -1.0");
        write_data(dir.path(), SuiteVersion::Cec2022, "M_1_D2.txt", "1 0 0 1");
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = EvalConfig::builder()
            .data_root(dir.path())
            .apply_bias(false)
            .build()
            .unwrap();

        let problem =
            create_problem(SuiteVersion::Cec2022, 1, 1, 2, &mut store, &config).unwrap();
        assert!(problem.optimum().y.abs() < 1e-9);
    }

    #[test]
    fn hybrid_shuffle_indices_are_validated() {
        let dimension = 10;
        let dir = tempdir().unwrap();
        write_function_data(dir.path(), SuiteVersion::Cec2022, 6, dimension, 1);
        // Overwrite the shuffle with an out-of-range entry.
        write_data(
            dir.path(),
            SuiteVersion::Cec2022,
            "shuffle_data_6_D10.txt",
            "1 2 3 4 5 6 7 8 9 11",
        );
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = config_for(dir.path());

        let result = create_problem(SuiteVersion::Cec2022, 6, 1, dimension, &mut store, &config);
        assert!(matches!(
            result,
            Err(ProblemError::InvalidShuffleIndex { index: 11, .. })
        ));
    }

    #[test]
    fn hybrid_partitions_reject_dimensions_with_no_room_for_every_chunk() {
        let dimension = 2;
        let dir = tempdir().unwrap();
        write_function_data(dir.path(), SuiteVersion::Cec2022, 8, dimension, 1);
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = config_for(dir.path());

        // Five chunks cannot fit into two coordinates.
        let result = create_problem(SuiteVersion::Cec2022, 8, 1, dimension, &mut store, &config);
        assert!(matches!(
            result,
            Err(ProblemError::InvalidDimension { dimension: 2, .. })
        ));
    }

    #[test]
    fn composition_tolerates_partially_available_stacked_data() {
        let dimension = 4;
        let version = SuiteVersion::Cec2022;
        let dir = tempdir().unwrap();
        // Function 10 blends three components, but the layout expects twelve
        // stacked blocks; providing exactly three is a truncated-but-usable
        // load.
        write_function_data(dir.path(), version, 10, dimension, 3);
        let mut store = AuxiliaryDataStore::new(dir.path());
        let config = config_for(dir.path());

        let problem = create_problem(version, 10, 1, dimension, &mut store, &config).unwrap();
        let optimum = problem.optimum().clone();
        let value = problem.evaluate(&optimum.x).unwrap();
        assert!(((value - optimum.y) / optimum.y.abs().max(1.0)).abs() < 1e-8);
    }
}
