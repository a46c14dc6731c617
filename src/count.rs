use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `n!` as an exact big integer. `factorial(0) == 1`.
pub fn factorial(n: usize) -> BigUint {
    (2..=n as u64).map(BigUint::from).product()
}

/// Number of k-combinations of n elements, `n! / (k! * (n-k)!)`.
///
/// Returns `0` when `n == 0`, `k == 0`, or `k > n`.
pub fn choose(n: usize, k: usize) -> BigUint {
    if n == 0 || k == 0 || k > n {
        BigUint::zero()
    } else if k == n {
        BigUint::one()
    } else {
        // The numerator is always divisible by the denominator, so the
        // division is exact.
        factorial(n) / (factorial(k) * factorial(n - k))
    }
}

/// Number of k-permutations of n elements, `n! / (n-k)!`.
///
/// Returns `0` when `k > n`.
pub fn permute(n: usize, k: usize) -> BigUint {
    if k > n {
        BigUint::zero()
    } else {
        factorial(n) / factorial(n - k)
    }
}

/// Number of k-combinations of n elements with replacement,
/// `(n+k-1)! / (k! * (n-1)!)`.
///
/// Returns `0` when `n == 0` or `k == 0`.
pub fn multichoose(n: usize, k: usize) -> BigUint {
    if n == 0 || k == 0 {
        BigUint::zero()
    } else {
        factorial(n + k - 1) / (factorial(k) * factorial(n - 1))
    }
}
