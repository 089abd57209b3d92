use num::{Float, NumCast};

/// Sublinear term frequency weight
/// w = 1 + log10(count)
///
/// # Arguments
/// * `count` - raw occurrence count, must be at least 1
///
/// # Returns
/// * `N` - weight, `1` for a single occurrence
#[inline]
pub fn log_weight<N>(count: u64) -> N
where
    N: Float,
{
    let count: N = NumCast::from(count).unwrap_or_else(N::one);
    N::one() + count.log10()
}

/// Squared Euclidean norm
/// ||a||^2 = Σ(a_i^2)
#[inline]
pub fn norm_sq<N, I>(values: I) -> N
where
    N: Float,
    I: IntoIterator<Item = N>,
{
    values.into_iter().fold(N::zero(), |acc, v| acc + v * v)
}

/// Euclidean norm with a checked radicand
///
/// # Returns
/// * `Ok(N)` - the norm
/// * `Err(N)` - the offending radicand if it is negative or not finite
#[inline]
pub fn checked_norm<N, I>(values: I) -> Result<N, N>
where
    N: Float,
    I: IntoIterator<Item = N>,
{
    let sq = norm_sq(values);
    if !sq.is_finite() || sq < N::zero() {
        return Err(sq);
    }
    Ok(sq.sqrt())
}

/// Angle between two vectors from their cosine ratio
/// θ = acos(ratio), restricted to [0, π/2]
///
/// Ratios that overshoot [-1, 1] by no more than `tolerance` are pulled back
/// into range before acos.
///
/// # Returns
/// * `Some(N)` - angle in radians
/// * `None` - ratio is not finite or overshoots beyond the tolerance
#[inline]
pub fn bounded_angle<N>(ratio: N, tolerance: N) -> Option<N>
where
    N: Float,
{
    if !ratio.is_finite() || ratio.abs() > N::one() + tolerance {
        return None;
    }
    let ratio = ratio.max(-N::one()).min(N::one());
    let half_pi: N = NumCast::from(std::f64::consts::FRAC_PI_2)?;
    Some(ratio.acos().max(N::zero()).min(half_pi))
}
