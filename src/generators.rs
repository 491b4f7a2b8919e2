//! Random inputs for checking an approximation against its ideal scoring
//! function.
//!
//! Everything takes an explicit rng, so a run can be repeated by reusing the
//! seed given to [`seeded`].
use rand::{
    distr::{Distribution, StandardUniform},
    Rng, SeedableRng,
};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Normal, NormalError};

/// A fast rng whose output only depends on `seed`.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `n` values sampled uniformly from `[0, 1)`.
pub fn uniform<R: Rng>(rng: &mut R, n: usize) -> Vec<f64> {
    <StandardUniform as Distribution<f64>>::sample_iter(StandardUniform, rng).take(n).collect()
}

/// Copy of `values` where every value has independent gaussian noise with
/// standard deviation `std_dev` added. Useful as a stand-in for an imprecise
/// approximation.
///
/// Fails with [`NormalError::BadVariance`] if `std_dev` is negative or not
/// finite.
pub fn jitter<R: Rng>(
    rng: &mut R,
    values: &[f64],
    std_dev: f64,
) -> Result<Vec<f64>, NormalError> {
    // `Normal::new` accepts a negative deviation and mirrors the noise
    if std_dev < 0.0 {
        return Err(NormalError::BadVariance);
    }
    let noise = Normal::new(0.0, std_dev)?;
    Ok(values.iter().map(|v| v + noise.sample(rng)).collect())
}
