use log::debug;

/// Number of equal-size selections needed to cover every unordered split of
/// a group of `n` values into two halves, i.e. `C(n, n/2) / 2`.
///
/// Returns `None` for odd `n`, where the two sides never have equal size.
pub fn half_binomial(n: usize) -> Option<usize> {
    if n % 2 == 1 {
        return None;
    }

    let k = n / 2;
    // After step j the product is C(n, j), so every division is exact.
    let product = ((n + 1 - k)..=n)
        .rev()
        .zip(1..=k)
        .fold(1usize, |product, (m, l)| product * m / l);
    Some(product / 2)
}

/// Lookup table of [`half_binomial`] values indexed by group size.
///
/// Filled once for every size up to the source length, then shared read-only
/// by every group built during a run.
#[derive(Debug, Clone)]
pub struct HalfBinomials {
    values: Vec<Option<usize>>,
}

impl HalfBinomials {
    pub fn new(max_size: usize) -> Self {
        let values: Vec<_> = (0..=max_size).map(half_binomial).collect();
        debug!("Cached half binomials up to size {}: {:?}", max_size, values);
        Self { values }
    }

    pub fn get(&self, n: usize) -> Option<usize> {
        match self.values.get(n) {
            Some(value) => *value,
            None => half_binomial(n),
        }
    }
}
