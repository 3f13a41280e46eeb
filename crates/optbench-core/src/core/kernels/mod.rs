//! # Kernel Module
//!
//! Base mathematical functions behind small capability traits.
//!
//! A kernel is the closed-form function being benchmarked, independent of any
//! shift, rotation, or bit-level transformation. Problems compose a kernel with
//! a transform specification instead of subclassing per function, so the
//! transformation engine stays decoupled from the combinatorial explosion of
//! kernel variants.
//!
//! Continuous kernels are written in canonical form: every one of them attains
//! its optimum value of exactly 0 at the origin (internal offsets such as
//! Rosenbrock's `+1` or Schwefel's `+420.9687...` are folded into the kernel).
//! Bit-string kernels attain their maximum at the all-ones string.

pub mod continuous;
pub mod pseudo_boolean;

/// Capability required of a continuous base function.
pub trait Kernel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Evaluates the kernel on an already-transformed input.
    fn evaluate(&self, z: &[f64]) -> f64;

    /// Input at which the untransformed kernel attains its optimum.
    fn optimum_input(&self, dimension: usize) -> Vec<f64> {
        vec![0.0; dimension]
    }
}

/// Capability required of a pseudo-boolean base function.
pub trait BitKernel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Evaluates the kernel on an already-transformed bit string. Any non-zero
    /// entry counts as a set bit.
    fn evaluate(&self, bits: &[u8]) -> f64;

    /// Input at which the untransformed kernel attains its maximum.
    fn optimum_input(&self, dimension: usize) -> Vec<u8> {
        vec![1; dimension]
    }
}

/// A [`Kernel`] backed by a plain function pointer.
#[derive(Debug, Clone, Copy)]
pub struct FnKernel {
    name: &'static str,
    eval: fn(&[f64]) -> f64,
}

impl FnKernel {
    pub const fn new(name: &'static str, eval: fn(&[f64]) -> f64) -> Self {
        Self { name, eval }
    }
}

impl Kernel for FnKernel {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, z: &[f64]) -> f64 {
        (self.eval)(z)
    }
}

/// A [`BitKernel`] backed by a plain function pointer.
#[derive(Debug, Clone, Copy)]
pub struct FnBitKernel {
    name: &'static str,
    eval: fn(&[u8]) -> f64,
}

impl FnBitKernel {
    pub const fn new(name: &'static str, eval: fn(&[u8]) -> f64) -> Self {
        Self { name, eval }
    }
}

impl BitKernel for FnBitKernel {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, bits: &[u8]) -> f64 {
        (self.eval)(bits)
    }
}

pub const BENT_CIGAR: FnKernel = FnKernel::new("bent_cigar", continuous::bent_cigar);
pub const ZAKHAROV: FnKernel = FnKernel::new("zakharov", continuous::zakharov);
pub const ROSENBROCK: FnKernel = FnKernel::new("rosenbrock", continuous::rosenbrock);
pub const RASTRIGIN: FnKernel = FnKernel::new("rastrigin", continuous::rastrigin);
pub const SCHAFFER_F7: FnKernel = FnKernel::new("schaffer_f7", continuous::schaffer_f7);
pub const LEVY: FnKernel = FnKernel::new("levy", continuous::levy);
pub const ACKLEY: FnKernel = FnKernel::new("ackley", continuous::ackley);
pub const GRIEWANK: FnKernel = FnKernel::new("griewank", continuous::griewank);
pub const SCHWEFEL: FnKernel = FnKernel::new("schwefel", continuous::schwefel);
pub const HAPPY_CAT: FnKernel = FnKernel::new("happy_cat", continuous::happy_cat);
pub const HGBAT: FnKernel = FnKernel::new("hgbat", continuous::hgbat);
pub const KATSUURA: FnKernel = FnKernel::new("katsuura", continuous::katsuura);
pub const DISCUS: FnKernel = FnKernel::new("discus", continuous::discus);
pub const ELLIPTIC: FnKernel = FnKernel::new("elliptic", continuous::elliptic);
pub const EXPANDED_SCHAFFER_F6: FnKernel =
    FnKernel::new("expanded_schaffer_f6", continuous::expanded_schaffer_f6);
pub const GRIEWANK_ROSENBROCK: FnKernel =
    FnKernel::new("griewank_rosenbrock", continuous::griewank_rosenbrock);
pub const LUNACEK_BI_RASTRIGIN: FnKernel =
    FnKernel::new("lunacek_bi_rastrigin", continuous::lunacek_bi_rastrigin);

pub const ONE_MAX: FnBitKernel = FnBitKernel::new("one_max", pseudo_boolean::one_max);
pub const LEADING_ONES: FnBitKernel =
    FnBitKernel::new("leading_ones", pseudo_boolean::leading_ones);
pub const LINEAR: FnBitKernel = FnBitKernel::new("linear", pseudo_boolean::linear);
pub const ISING_RING: FnBitKernel = FnBitKernel::new("ising_ring", pseudo_boolean::ising_ring);
