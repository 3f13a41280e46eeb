use crate::core::utils::random::uniform;

/// Deterministically selects `floor(select_rate * n)` bit positions.
///
/// A partial Fisher-Yates pass over the identity index vector, driven by the
/// instance generator, picks the subset; the result is returned in ascending
/// order. Evaluation then only inspects the selected positions, which is what
/// turns the remaining coordinates into dummy variables.
pub fn dummy_positions(n: usize, select_rate: f64, seed: i64) -> Vec<usize> {
    let select = ((n as f64) * select_rate).floor() as usize;
    let mut positions: Vec<usize> = (0..n).collect();
    let draws = uniform(select, seed);

    for (i, &draw) in draws.iter().enumerate() {
        let remaining = n - i;
        let pick = i + ((draw * remaining as f64).floor() as usize).min(remaining - 1);
        positions.swap(i, pick);
    }

    positions.truncate(select);
    positions.sort_unstable();
    positions
}

/// Majority-folds each complete `mu`-bit block into a single output bit.
/// Ties on even block sizes fold to 0; a trailing partial block is dropped.
pub fn neutrality(bits: &[u8], mu: usize) -> Vec<u8> {
    assert!(mu > 0, "neutrality block size must be positive");
    bits.chunks_exact(mu)
        .map(|block| {
            let ones = block.iter().filter(|&&b| b != 0).count();
            (2 * ones > mu) as u8
        })
        .collect()
}

/// Remaps each complete `nu`-bit block: output bit `h` is the XOR of every
/// block bit except the one at index `nu - 1 - h`. The map is a bijection on
/// blocks for even `nu` and keeps the all-ones block fixed. A trailing partial
/// block passes through unchanged.
pub fn epistasis(bits: &[u8], nu: usize) -> Vec<u8> {
    assert!(nu > 0, "epistasis block size must be positive");
    let mut out = bits.to_vec();
    let mut start = 0;
    while start + nu <= bits.len() {
        let block = &bits[start..start + nu];
        for h in 0..nu {
            let excluded = nu - 1 - h;
            let mut acc = 0u8;
            for (j, &bit) in block.iter().enumerate() {
                if j != excluded {
                    acc ^= (bit != 0) as u8;
                }
            }
            out[start + h] = acc;
        }
        start += nu;
    }
    out
}

/// Ruggedness scheme 1: plateaus. Pairs of adjacent objective values, aligned
/// from the top, collapse onto their lower member; the optimum `n` stays fixed.
pub fn ruggedness1(n: usize) -> Vec<f64> {
    let mut table = vec![0.0; n + 1];
    for i in 0..n {
        let gap = n - i;
        table[i] = i.saturating_sub(gap % 2) as f64;
    }
    table[n] = n as f64;
    table
}

/// Ruggedness scheme 2: alternation. Adjacent objective values below the
/// optimum swap pairwise, so single-bit improvements alternate in sign; the
/// optimum `n` stays fixed.
pub fn ruggedness2(n: usize) -> Vec<f64> {
    let mut table = vec![0.0; n + 1];
    for i in 0..n {
        let gap = n - i;
        table[i] = if gap % 2 == 1 {
            i.saturating_sub(1) as f64
        } else {
            (i + 1) as f64
        };
    }
    table[n] = n as f64;
    table
}

/// Ruggedness scheme 3: deceptive blocks. Each complete block of five values
/// below the optimum is reversed in place, and the leading partial block is
/// reversed as well; the optimum `n` stays fixed.
pub fn ruggedness3(n: usize) -> Vec<f64> {
    let mut table: Vec<f64> = (0..=n).map(|i| i as f64).collect();
    for j in 1..=(n / 5) {
        let base = n - 5 * j;
        for k in 0..5 {
            table[base + k] = (base + 4 - k) as f64;
        }
    }
    let remainder = n - (n / 5) * 5;
    for k in 0..remainder {
        table[k] = (remainder - 1 - k) as f64;
    }
    table[n] = n as f64;
    table
}
