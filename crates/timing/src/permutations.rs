use rand::Rng;

/// Uniform integer in `[inf, sup]`.
///
/// # Panics
///
/// Panics if `inf > sup`.
pub fn random_num<R: Rng + ?Sized>(rng: &mut R, inf: usize, sup: usize) -> usize {
    assert!(inf <= sup, "empty range [{inf}, {sup}]");
    if inf == sup {
        return sup;
    }
    rng.random_range(inf..=sup)
}

/// Uniformly shuffled permutation of `1..=n`.
///
/// # Panics
///
/// Panics if `n` exceeds `i32::MAX`.
pub fn generate_perm<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i32> {
    assert!(n <= i32::MAX as usize, "permutation size {n} exceeds i32::MAX");
    let mut perm: Vec<i32> = (1..=n as i32).collect();
    for i in 0..n {
        let j = random_num(rng, i, n - 1);
        perm.swap(i, j);
    }
    perm
}

pub fn generate_permutations<R: Rng + ?Sized>(
    rng: &mut R,
    n_perms: usize,
    n: usize,
) -> Vec<Vec<i32>> {
    (0..n_perms).map(|_| generate_perm(rng, n)).collect()
}
