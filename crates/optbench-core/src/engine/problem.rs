use super::composition::{ComponentMix, WeightStrategy, compose};
use super::error::EvalError;
use super::layout::SuiteVersion;
use super::store::LoadedBuffer;
use crate::core::kernels::{BitKernel, Kernel};
use crate::core::transforms::{continuous, discrete};
use nalgebra::DMatrix;
use std::sync::Arc;

/// Direction of the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationGoal {
    Minimize,
    Maximize,
}

/// The known best input and its objective value, consistent with the
/// problem's transforms by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimum<X> {
    pub x: Vec<X>,
    pub y: f64,
}

/// A plain shifted/scaled/rotated kernel.
pub struct SingleSpec {
    pub kernel: Box<dyn Kernel>,
    /// Shared load from the data store; only the dimension prefix is read.
    pub shift: Option<Arc<LoadedBuffer<f64>>>,
    pub rotation: Option<DMatrix<f64>>,
    pub scale_rate: f64,
}

/// One chunk of a hybrid function.
pub struct HybridPart {
    pub kernel: Box<dyn Kernel>,
    pub length: usize,
    pub scale_rate: f64,
}

/// A hybrid function: global shift/rotation, then a shuffle, then the
/// coordinates are split into consecutive chunks evaluated by per-part
/// kernels and summed.
pub struct HybridSpec {
    pub shift: Option<Arc<LoadedBuffer<f64>>>,
    pub rotation: Option<DMatrix<f64>>,
    /// 0-based permutation of length `dimension`.
    pub shuffle: Vec<usize>,
    pub parts: Vec<HybridPart>,
}

/// One component of a composition function, carrying its own transform data.
pub struct CompositionComponent {
    pub kernel: Box<dyn Kernel>,
    /// This component's shift point, length `dimension`.
    pub shift: Vec<f64>,
    pub rotation: Option<DMatrix<f64>>,
    pub scale_rate: f64,
    pub mix: ComponentMix,
}

/// A composition function: every component is evaluated on its own transform
/// of the input and the results are distance-weight blended.
pub struct CompositionSpec {
    pub components: Vec<CompositionComponent>,
    pub strategy: Box<dyn WeightStrategy>,
}

/// Per-problem record of which transformations apply and the data they use.
pub enum TransformSpec {
    Single(SingleSpec),
    Hybrid(HybridSpec),
    Composition(CompositionSpec),
}

/// A continuous benchmark problem, ready to evaluate.
///
/// Construction derives the transformed optimum by pushing the kernel's
/// reference optimum through the exact forward path `evaluate` uses, so the
/// recorded pair is self-consistent by construction.
pub struct Problem {
    name: String,
    version: SuiteVersion,
    function_id: u32,
    instance: u32,
    dimension: usize,
    bias: f64,
    spec: TransformSpec,
    optimum: Optimum<f64>,
}

impl Problem {
    pub fn new(
        name: impl Into<String>,
        version: SuiteVersion,
        function_id: u32,
        instance: u32,
        dimension: usize,
        spec: TransformSpec,
        bias: f64,
    ) -> Self {
        debug_assert!(dimension > 0);
        let mut problem = Self {
            name: name.into(),
            version,
            function_id,
            instance,
            dimension,
            bias,
            spec,
            optimum: Optimum { x: Vec::new(), y: 0.0 },
        };
        let x = problem.optimum_input();
        let y = problem.objective(&x);
        problem.optimum = Optimum { x, y };
        problem
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> SuiteVersion {
        self.version
    }

    pub fn function_id(&self) -> u32 {
        self.function_id
    }

    pub fn instance(&self) -> u32 {
        self.instance
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn goal(&self) -> OptimizationGoal {
        OptimizationGoal::Minimize
    }

    pub fn optimum(&self) -> &Optimum<f64> {
        &self.optimum
    }

    /// Evaluates the objective. Scratch space is allocated per call, so `&self`
    /// evaluation is safe to share across threads.
    pub fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        if x.len() != self.dimension {
            return Err(EvalError::DimensionMismatch {
                expected: self.dimension,
                actual: x.len(),
            });
        }
        Ok(self.objective(x))
    }

    /// The input where the transformed problem attains its optimum: the
    /// kernel's reference optimum translated by the shift point.
    fn optimum_input(&self) -> Vec<f64> {
        match &self.spec {
            TransformSpec::Single(single) => {
                let mut x = single.kernel.optimum_input(self.dimension);
                if let Some(shift) = &single.shift {
                    for (value, delta) in x.iter_mut().zip(&shift.values) {
                        *value += delta;
                    }
                }
                x
            }
            TransformSpec::Hybrid(hybrid) => {
                let mut x = vec![0.0; self.dimension];
                if let Some(shift) = &hybrid.shift {
                    x.copy_from_slice(&shift.values[..self.dimension]);
                }
                x
            }
            TransformSpec::Composition(composition) => {
                composition.components[0].shift.clone()
            }
        }
    }

    fn objective(&self, x: &[f64]) -> f64 {
        let raw = match &self.spec {
            TransformSpec::Single(single) => {
                let mut z = x.to_vec();
                continuous::shift_scale_rotate(
                    &mut z,
                    single.shift.as_ref().map(|b| b.values.as_slice()),
                    single.rotation.as_ref(),
                    single.scale_rate,
                );
                single.kernel.evaluate(&z)
            }
            TransformSpec::Hybrid(hybrid) => {
                let mut z = x.to_vec();
                continuous::shift_scale_rotate(
                    &mut z,
                    hybrid.shift.as_ref().map(|b| b.values.as_slice()),
                    hybrid.rotation.as_ref(),
                    1.0,
                );
                let mut shuffled = vec![0.0; z.len()];
                continuous::shuffle(&z, &hybrid.shuffle, &mut shuffled);

                let mut total = 0.0;
                let mut offset = 0;
                for part in &hybrid.parts {
                    let mut chunk = shuffled[offset..offset + part.length].to_vec();
                    continuous::scale(&mut chunk, part.scale_rate);
                    total += part.kernel.evaluate(&chunk);
                    offset += part.length;
                }
                total
            }
            TransformSpec::Composition(composition) => {
                let count = composition.components.len();
                let mut raw_values = Vec::with_capacity(count);
                let mut squared_distances = Vec::with_capacity(count);
                let mut mixes = Vec::with_capacity(count);
                for component in &composition.components {
                    squared_distances.push(
                        x.iter()
                            .zip(&component.shift)
                            .map(|(a, b)| (a - b) * (a - b))
                            .sum(),
                    );
                    let mut z = x.to_vec();
                    continuous::shift_scale_rotate(
                        &mut z,
                        Some(&component.shift),
                        component.rotation.as_ref(),
                        component.scale_rate,
                    );
                    raw_values.push(component.kernel.evaluate(&z));
                    mixes.push(component.mix);
                }
                compose(
                    &raw_values,
                    &squared_distances,
                    &mixes,
                    self.dimension,
                    composition.strategy.as_ref(),
                )
            }
        };
        raw + self.bias
    }
}

/// W-model layer configuration for a bit-string problem. Layers apply in the
/// fixed order dummy -> neutrality -> epistasis -> kernel -> ruggedness.
#[derive(Debug, Clone, Default)]
pub struct WModelLayers {
    /// Selected bit positions; unselected coordinates are dummy variables.
    pub dummy: Option<Vec<usize>>,
    /// Neutrality fold block size.
    pub neutrality: Option<usize>,
    /// Epistasis remap block size.
    pub epistasis: Option<usize>,
    /// Objective-value permutation table, indexed by the rounded raw value.
    pub ruggedness: Option<Vec<f64>>,
}

/// Instance-derived transformation of a bit-string problem: a variable-side
/// XOR mask or coordinate permutation, and an affine map on the objective.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceTransform {
    pub xor_mask: Option<Vec<u8>>,
    pub permutation: Option<Vec<usize>>,
    pub scale: f64,
    pub offset: f64,
}

impl InstanceTransform {
    pub fn identity() -> Self {
        Self {
            xor_mask: None,
            permutation: None,
            scale: 1.0,
            offset: 0.0,
        }
    }
}

/// A pseudo-boolean benchmark problem (maximization).
///
/// The recorded optimum is the preimage of the all-ones string under the
/// instance transform, evaluated through the full pipeline; for every wired
/// layer combination the all-ones string maximizes the layered kernel.
pub struct BitProblem {
    name: String,
    function_id: u32,
    instance: u32,
    dimension: usize,
    kernel: Box<dyn BitKernel>,
    layers: WModelLayers,
    transform: InstanceTransform,
    optimum: Optimum<u8>,
}

impl BitProblem {
    pub fn new(
        name: impl Into<String>,
        function_id: u32,
        instance: u32,
        dimension: usize,
        kernel: Box<dyn BitKernel>,
        layers: WModelLayers,
        transform: InstanceTransform,
    ) -> Self {
        debug_assert!(dimension > 0);
        let mut problem = Self {
            name: name.into(),
            function_id,
            instance,
            dimension,
            kernel,
            layers,
            transform,
            optimum: Optimum { x: Vec::new(), y: 0.0 },
        };
        let x = problem.optimum_input();
        let y = problem.objective(&x);
        problem.optimum = Optimum { x, y };
        problem
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function_id(&self) -> u32 {
        self.function_id
    }

    pub fn instance(&self) -> u32 {
        self.instance
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn goal(&self) -> OptimizationGoal {
        OptimizationGoal::Maximize
    }

    pub fn optimum(&self) -> &Optimum<u8> {
        &self.optimum
    }

    /// Evaluates the objective. Any non-zero entry counts as a set bit.
    pub fn evaluate(&self, x: &[u8]) -> Result<f64, EvalError> {
        if x.len() != self.dimension {
            return Err(EvalError::DimensionMismatch {
                expected: self.dimension,
                actual: x.len(),
            });
        }
        Ok(self.objective(x))
    }

    /// Preimage of the all-ones string under the instance transform.
    fn optimum_input(&self) -> Vec<u8> {
        let mut target = vec![1u8; self.dimension];
        if let Some(mask) = &self.transform.xor_mask {
            for (bit, m) in target.iter_mut().zip(mask) {
                *bit ^= m;
            }
        }
        if let Some(permutation) = &self.transform.permutation {
            let mut x = vec![0u8; self.dimension];
            for (i, &p) in permutation.iter().enumerate() {
                x[p] = target[i];
            }
            target = x;
        }
        target
    }

    fn objective(&self, x: &[u8]) -> f64 {
        let mut bits: Vec<u8> = match &self.transform.permutation {
            Some(permutation) => permutation.iter().map(|&i| (x[i] != 0) as u8).collect(),
            None => x.iter().map(|&b| (b != 0) as u8).collect(),
        };
        if let Some(mask) = &self.transform.xor_mask {
            for (bit, m) in bits.iter_mut().zip(mask) {
                *bit ^= m;
            }
        }

        if let Some(positions) = &self.layers.dummy {
            bits = positions.iter().map(|&p| bits[p]).collect();
        }
        if let Some(mu) = self.layers.neutrality {
            bits = discrete::neutrality(&bits, mu);
        }
        if let Some(nu) = self.layers.epistasis {
            bits = discrete::epistasis(&bits, nu);
        }

        let mut y = self.kernel.evaluate(&bits);
        if let Some(table) = &self.layers.ruggedness {
            let index = (y.round().max(0.0) as usize).min(table.len() - 1);
            y = table[index];
        }
        y * self.transform.scale + self.transform.offset
    }
}
