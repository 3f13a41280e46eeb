use std::f64::consts::{E, PI};

// Schwefel's internal offset and the per-variable plateau value at the optimum.
const SCHWEFEL_OFFSET: f64 = 4.209_687_462_275_036e2;
const SCHWEFEL_PLATEAU: f64 = 4.189_828_872_724_338e2;

/// Bent cigar: a smooth ridge with conditioning 1e6.
#[inline]
pub fn bent_cigar(z: &[f64]) -> f64 {
    let mut total = z[0] * z[0];
    for &v in &z[1..] {
        total += 1e6 * v * v;
    }
    total
}

/// Zakharov function.
#[inline]
pub fn zakharov(z: &[f64]) -> f64 {
    let sum_sq: f64 = z.iter().map(|&v| v * v).sum();
    let weighted: f64 = z
        .iter()
        .enumerate()
        .map(|(i, &v)| 0.5 * (i as f64 + 1.0) * v)
        .sum();
    sum_sq + weighted.powi(2) + weighted.powi(4)
}

/// Rosenbrock in canonical form: the internal `+1` moves the optimum to the origin.
#[inline]
pub fn rosenbrock(z: &[f64]) -> f64 {
    let mut total = 0.0;
    for i in 0..z.len().saturating_sub(1) {
        let a = z[i] + 1.0;
        let b = z[i + 1] + 1.0;
        total += 100.0 * (a * a - b).powi(2) + (a - 1.0).powi(2);
    }
    total
}

/// Rastrigin function.
#[inline]
pub fn rastrigin(z: &[f64]) -> f64 {
    z.iter()
        .map(|&v| v * v - 10.0 * (2.0 * PI * v).cos() + 10.0)
        .sum()
}

/// Schaffer's F7.
#[inline]
pub fn schaffer_f7(z: &[f64]) -> f64 {
    if z.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..z.len() - 1 {
        let s = (z[i] * z[i] + z[i + 1] * z[i + 1]).sqrt();
        total += s.sqrt() * ((50.0 * s.powf(0.2)).sin() + 1.0);
    }
    (total / (z.len() as f64 - 1.0)).powi(2)
}

/// Levy function with `w = 1 + z/4`, optimum at the origin.
#[inline]
pub fn levy(z: &[f64]) -> f64 {
    let w = |v: f64| 1.0 + v / 4.0;
    let n = z.len();
    let mut total = (PI * w(z[0])).sin().powi(2);
    for &v in &z[..n - 1] {
        let wi = w(v);
        total += (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2));
    }
    let wn = w(z[n - 1]);
    total + (wn - 1.0).powi(2) * (1.0 + (2.0 * PI * wn).sin().powi(2))
}

/// Ackley function.
#[inline]
pub fn ackley(z: &[f64]) -> f64 {
    let n = z.len() as f64;
    let sum_sq: f64 = z.iter().map(|&v| v * v).sum();
    let sum_cos: f64 = z.iter().map(|&v| (2.0 * PI * v).cos()).sum();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}

/// Griewank function.
#[inline]
pub fn griewank(z: &[f64]) -> f64 {
    let sum: f64 = z.iter().map(|&v| v * v).sum::<f64>() / 4000.0;
    let product: f64 = z
        .iter()
        .enumerate()
        .map(|(i, &v)| (v / ((i as f64 + 1.0).sqrt())).cos())
        .product();
    sum - product + 1.0
}

/// Modified Schwefel with the standard out-of-range penalty branches.
#[inline]
pub fn schwefel(z: &[f64]) -> f64 {
    let n = z.len() as f64;
    let mut total = SCHWEFEL_PLATEAU * n;
    for &v in z {
        let zhat = v + SCHWEFEL_OFFSET;
        let g = if zhat.abs() <= 500.0 {
            zhat * zhat.abs().sqrt().sin()
        } else if zhat > 500.0 {
            let wrapped = 500.0 - zhat % 500.0;
            wrapped * wrapped.abs().sqrt().sin() - (zhat - 500.0).powi(2) / (10_000.0 * n)
        } else {
            let wrapped = zhat.abs() % 500.0 - 500.0;
            wrapped * wrapped.abs().sqrt().sin() - (zhat + 500.0).powi(2) / (10_000.0 * n)
        };
        total -= g;
    }
    total
}

/// HappyCat function (alpha = 1/8).
#[inline]
pub fn happy_cat(z: &[f64]) -> f64 {
    let n = z.len() as f64;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &v in z {
        let y = v - 1.0;
        sum += y;
        sum_sq += y * y;
    }
    (sum_sq - n).abs().powf(0.25) + (0.5 * sum_sq + sum) / n + 0.5
}

/// HGBat function.
#[inline]
pub fn hgbat(z: &[f64]) -> f64 {
    let n = z.len() as f64;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &v in z {
        let y = v - 1.0;
        sum += y;
        sum_sq += y * y;
    }
    (sum_sq.powi(2) - sum.powi(2)).abs().sqrt() + (0.5 * sum_sq + sum) / n + 0.5
}

/// Katsuura function.
#[inline]
pub fn katsuura(z: &[f64]) -> f64 {
    let n = z.len() as f64;
    let exponent = 10.0 / n.powf(1.2);
    let mut product = 1.0;
    for (i, &v) in z.iter().enumerate() {
        let mut inner = 0.0;
        for j in 1..=32 {
            let scaled = 2f64.powi(j) * v;
            inner += (scaled - scaled.round()).abs() / 2f64.powi(j);
        }
        product *= (1.0 + (i as f64 + 1.0) * inner).powf(exponent);
    }
    10.0 / (n * n) * product - 10.0 / (n * n)
}

/// Discus: a single heavy coordinate.
#[inline]
pub fn discus(z: &[f64]) -> f64 {
    let mut total = 1e6 * z[0] * z[0];
    for &v in &z[1..] {
        total += v * v;
    }
    total
}

/// High-conditioned elliptic function.
#[inline]
pub fn elliptic(z: &[f64]) -> f64 {
    let n = z.len();
    if n == 1 {
        return z[0] * z[0];
    }
    z.iter()
        .enumerate()
        .map(|(i, &v)| 1e6f64.powf(i as f64 / (n as f64 - 1.0)) * v * v)
        .sum()
}

fn schaffer_f6_pair(x: f64, y: f64) -> f64 {
    let sum_sq = x * x + y * y;
    0.5 + (sum_sq.sqrt().sin().powi(2) - 0.5) / (1.0 + 0.001 * sum_sq).powi(2)
}

/// Expanded Schaffer's F6, cyclic over consecutive coordinate pairs.
#[inline]
pub fn expanded_schaffer_f6(z: &[f64]) -> f64 {
    let n = z.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..n - 1 {
        total += schaffer_f6_pair(z[i], z[i + 1]);
    }
    total + schaffer_f6_pair(z[n - 1], z[0])
}

/// Expanded Griewank-of-Rosenbrock, cyclic, optimum folded onto the origin.
#[inline]
pub fn griewank_rosenbrock(z: &[f64]) -> f64 {
    let n = z.len();
    if n < 2 {
        return 0.0;
    }
    let g = |t: f64| t * t / 4000.0 - t.cos() + 1.0;
    let rosen_pair = |a: f64, b: f64| 100.0 * (a * a - b).powi(2) + (a - 1.0).powi(2);
    let mut total = 0.0;
    for i in 0..n - 1 {
        total += g(rosen_pair(z[i] + 1.0, z[i + 1] + 1.0));
    }
    total + g(rosen_pair(z[n - 1] + 1.0, z[0] + 1.0))
}

/// Lunacek bi-Rastrigin, canonical form with the sphere basin at the origin.
#[inline]
pub fn lunacek_bi_rastrigin(z: &[f64]) -> f64 {
    let n = z.len() as f64;
    let mu0 = 2.5;
    let s = 1.0 - 1.0 / (2.0 * (n + 20.0).sqrt() - 8.2);
    let mu1 = -((mu0 * mu0 - 1.0) / s).sqrt();

    let mut basin0 = 0.0;
    let mut basin1 = 0.0;
    let mut cos_sum = 0.0;
    for &v in z {
        let x = v + mu0;
        basin0 += (x - mu0).powi(2);
        basin1 += (x - mu1).powi(2);
        cos_sum += (2.0 * PI * (x - mu0)).cos();
    }
    basin0.min(n + s * basin1) + 10.0 * (n - cos_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_zero_at_origin(kernel: fn(&[f64]) -> f64, name: &str) {
        for dim in [2usize, 5, 10] {
            let origin = vec![0.0; dim];
            let value = kernel(&origin);
            assert!(
                value.abs() < 1e-6,
                "{} at origin (dim {}) should be ~0, got {}",
                name,
                dim,
                value
            );
        }
    }

    #[test]
    fn every_kernel_is_zero_at_the_origin() {
        assert_zero_at_origin(bent_cigar, "bent_cigar");
        assert_zero_at_origin(zakharov, "zakharov");
        assert_zero_at_origin(rosenbrock, "rosenbrock");
        assert_zero_at_origin(rastrigin, "rastrigin");
        assert_zero_at_origin(schaffer_f7, "schaffer_f7");
        assert_zero_at_origin(levy, "levy");
        assert_zero_at_origin(ackley, "ackley");
        assert_zero_at_origin(griewank, "griewank");
        assert_zero_at_origin(happy_cat, "happy_cat");
        assert_zero_at_origin(hgbat, "hgbat");
        assert_zero_at_origin(katsuura, "katsuura");
        assert_zero_at_origin(discus, "discus");
        assert_zero_at_origin(elliptic, "elliptic");
        assert_zero_at_origin(expanded_schaffer_f6, "expanded_schaffer_f6");
        assert_zero_at_origin(griewank_rosenbrock, "griewank_rosenbrock");
        assert_zero_at_origin(lunacek_bi_rastrigin, "lunacek_bi_rastrigin");
    }

    #[test]
    fn schwefel_is_nearly_zero_at_the_origin() {
        // The plateau constant truncates the analytic value, so the residue is
        // larger than machine epsilon but far below any benchmark tolerance.
        let value = schwefel(&[0.0; 10]);
        assert!(value.abs() < 1e-4, "schwefel at origin: {}", value);
    }

    #[test]
    fn bent_cigar_weights_tail_coordinates() {
        let value = bent_cigar(&[1.0, 2.0]);
        assert!((value - (1.0 + 4e6)).abs() < TOLERANCE);
    }

    #[test]
    fn discus_weights_head_coordinate() {
        let value = discus(&[2.0, 3.0]);
        assert!((value - (4e6 + 9.0)).abs() < TOLERANCE);
    }

    #[test]
    fn zakharov_matches_hand_computation() {
        // z = [1, 2]: sum_sq = 5, weighted = 0.5*1 + 1.0*2 = 2.5
        let expected = 5.0 + 2.5f64.powi(2) + 2.5f64.powi(4);
        assert!((zakharov(&[1.0, 2.0]) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn rastrigin_matches_hand_computation() {
        // cos(2*pi*0.5) = -1 per coordinate
        let value = rastrigin(&[0.5, 0.5]);
        assert!((value - 2.0 * (0.25 + 10.0 + 10.0)).abs() < TOLERANCE);
    }

    #[test]
    fn rosenbrock_has_its_valley_shifted_to_the_origin() {
        assert!(rosenbrock(&[0.0, 0.0, 0.0]).abs() < TOLERANCE);
        assert!(rosenbrock(&[1.0, 1.0]) > 0.0);
    }

    #[test]
    fn schwefel_penalizes_out_of_range_coordinates() {
        let inside = schwefel(&[0.0, 0.0]);
        let above = schwefel(&[200.0, 0.0]);
        let below = schwefel(&[-2000.0, 0.0]);
        assert!(above > inside);
        assert!(below > inside);
    }

    #[test]
    fn expanded_schaffer_f6_is_cyclic() {
        let a = expanded_schaffer_f6(&[1.0, 2.0, 3.0]);
        let rotated = expanded_schaffer_f6(&[2.0, 3.0, 1.0]);
        assert!((a - rotated).abs() < TOLERANCE);
    }

    #[test]
    fn lunacek_second_basin_is_a_local_optimum_only() {
        let n = 4usize;
        let nf = n as f64;
        let s = 1.0 - 1.0 / (2.0 * (nf + 20.0).sqrt() - 8.2);
        let mu1 = -((2.5f64 * 2.5 - 1.0) / s).sqrt();
        // Second basin centre, expressed in kernel coordinates.
        let second = vec![mu1 - 2.5; n];
        assert!(lunacek_bi_rastrigin(&second) > 0.0);
    }
}
