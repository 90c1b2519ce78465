use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Absolute tolerance used by [`FPA`].
/// Coordinates are in sheet units (typically millimetres), so `1e-9` is far below any meaningful distance.
pub const FPA_EPSILON: f64 = 1e-9;

/// Tolerant float, wraps [`float_cmp::approx_eq!()`] so that ordinary comparison operators can be used.
/// Two values within [`FPA_EPSILON`] (or a few ULPs) of each other compare as equal,
/// `<` and `>` only hold when the values are further apart.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = FPA_EPSILON)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_noise_is_equal() {
        assert!(FPA(0.1 + 0.2) == FPA(0.3));
        assert!(FPA(100.0 - 1e-12) <= FPA(100.0));
        assert!(FPA(100.0 + 1e-12) <= FPA(100.0));
    }

    #[test]
    fn distinct_values_are_ordered() {
        assert!(FPA(1.0) < FPA(1.001));
        assert!(FPA(-1e-6) < FPA(0.0));
    }
}
