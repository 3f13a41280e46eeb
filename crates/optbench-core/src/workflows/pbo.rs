use crate::core::kernels::{self, FnBitKernel};
use crate::core::transforms::discrete;
use crate::core::utils::random::uniform;
use crate::engine::error::ProblemError;
use crate::engine::problem::{BitProblem, InstanceTransform, WModelLayers};

/// Seed of the dummy-variable selection; fixed by the suite definition so the
/// selected subset is a property of the function, not of the instance.
const DUMMY_SEED: i64 = 10_000;
const NEUTRALITY_MU: usize = 3;
const EPISTASIS_NU: usize = 4;

/// Instance numbers are partitioned into transformation classes: 1 is the
/// identity, 2..=50 XOR the variables with a seeded mask, 51..=100 permute
/// the coordinates. Larger instance numbers reuse the XOR scheme.
const PERMUTATION_INSTANCES: std::ops::RangeInclusive<u32> = 51..=100;

enum Layer {
    Plain,
    Dummy(f64),
    Neutrality,
    Epistasis,
    Ruggedness1,
    Ruggedness2,
    Ruggedness3,
}

fn definition(function_id: u32) -> Option<(&'static str, FnBitKernel, Layer)> {
    let def = match function_id {
        1 => ("one_max", kernels::ONE_MAX, Layer::Plain),
        2 => ("leading_ones", kernels::LEADING_ONES, Layer::Plain),
        3 => ("linear", kernels::LINEAR, Layer::Plain),
        4 => ("one_max_dummy1", kernels::ONE_MAX, Layer::Dummy(0.5)),
        5 => ("one_max_dummy2", kernels::ONE_MAX, Layer::Dummy(0.9)),
        6 => ("one_max_neutrality", kernels::ONE_MAX, Layer::Neutrality),
        7 => ("one_max_epistasis", kernels::ONE_MAX, Layer::Epistasis),
        8 => ("one_max_ruggedness1", kernels::ONE_MAX, Layer::Ruggedness1),
        9 => ("one_max_ruggedness2", kernels::ONE_MAX, Layer::Ruggedness2),
        10 => ("one_max_ruggedness3", kernels::ONE_MAX, Layer::Ruggedness3),
        11 => ("leading_ones_dummy1", kernels::LEADING_ONES, Layer::Dummy(0.5)),
        12 => ("leading_ones_dummy2", kernels::LEADING_ONES, Layer::Dummy(0.9)),
        13 => ("leading_ones_neutrality", kernels::LEADING_ONES, Layer::Neutrality),
        14 => ("leading_ones_epistasis", kernels::LEADING_ONES, Layer::Epistasis),
        15 => ("leading_ones_ruggedness1", kernels::LEADING_ONES, Layer::Ruggedness1),
        16 => ("leading_ones_ruggedness2", kernels::LEADING_ONES, Layer::Ruggedness2),
        17 => ("leading_ones_ruggedness3", kernels::LEADING_ONES, Layer::Ruggedness3),
        19 => ("ising_ring", kernels::ISING_RING, Layer::Plain),
        _ => return None,
    };
    Some(def)
}

/// Builds a pseudo-boolean benchmark problem.
///
/// Everything is derived deterministically from the function id, the instance
/// number, and the dimension; no auxiliary files are involved.
pub fn create_problem(
    function_id: u32,
    instance: u32,
    dimension: usize,
) -> Result<BitProblem, ProblemError> {
    if dimension == 0 {
        return Err(ProblemError::InvalidDimension {
            dimension,
            context: "pseudo-boolean problems",
        });
    }
    let (name, kernel, layer) =
        definition(function_id).ok_or(ProblemError::UnknownBitFunction { function_id })?;

    let layers = match layer {
        Layer::Plain => WModelLayers::default(),
        Layer::Dummy(rate) => {
            let positions = discrete::dummy_positions(dimension, rate, DUMMY_SEED);
            if positions.is_empty() {
                return Err(ProblemError::InvalidDimension {
                    dimension,
                    context: "dummy variable selection",
                });
            }
            WModelLayers {
                dummy: Some(positions),
                ..WModelLayers::default()
            }
        }
        Layer::Neutrality => {
            if dimension < NEUTRALITY_MU {
                return Err(ProblemError::InvalidDimension {
                    dimension,
                    context: "neutrality folding",
                });
            }
            WModelLayers {
                neutrality: Some(NEUTRALITY_MU),
                ..WModelLayers::default()
            }
        }
        Layer::Epistasis => WModelLayers {
            epistasis: Some(EPISTASIS_NU),
            ..WModelLayers::default()
        },
        Layer::Ruggedness1 => WModelLayers {
            ruggedness: Some(discrete::ruggedness1(dimension)),
            ..WModelLayers::default()
        },
        Layer::Ruggedness2 => WModelLayers {
            ruggedness: Some(discrete::ruggedness2(dimension)),
            ..WModelLayers::default()
        },
        Layer::Ruggedness3 => WModelLayers {
            ruggedness: Some(discrete::ruggedness3(dimension)),
            ..WModelLayers::default()
        },
    };

    let transform = instance_transform(instance, dimension);
    Ok(BitProblem::new(
        name,
        function_id,
        instance,
        dimension,
        Box::new(kernel),
        layers,
        transform,
    ))
}

/// Derives the instance transformation. Instance 1 is the canonical problem;
/// other instances get a variable-side transform plus an order-preserving
/// affine map on the objective, all seeded by the instance number.
fn instance_transform(instance: u32, dimension: usize) -> InstanceTransform {
    if instance <= 1 {
        return InstanceTransform::identity();
    }

    let affine = uniform(2, instance as i64);
    let scale = 1.0 + 4.0 * affine[0];
    let offset = 2_000.0 * affine[1] - 1_000.0;

    let variable_seed = instance as i64 * 1_000;
    let (xor_mask, permutation) = if PERMUTATION_INSTANCES.contains(&instance) {
        (None, Some(random_permutation(dimension, variable_seed)))
    } else {
        (Some(random_bits(dimension, variable_seed)), None)
    };

    InstanceTransform {
        xor_mask,
        permutation,
        scale,
        offset,
    }
}

fn random_bits(n: usize, seed: i64) -> Vec<u8> {
    uniform(n, seed)
        .into_iter()
        .map(|draw| (draw < 0.5) as u8)
        .collect()
}

fn random_permutation(n: usize, seed: i64) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..n).collect();
    let draws = uniform(n, seed);
    for (i, &draw) in draws.iter().enumerate() {
        let remaining = n - i;
        let pick = i + ((draw * remaining as f64).floor() as usize).min(remaining - 1);
        positions.swap(i, pick);
    }
    positions
}
