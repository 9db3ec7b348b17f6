use ark_ff::PrimeField;
use ark_std::vec::Vec;

/// Powers of `elem` as `[1, elem, elem^2, ..., elem^{count-1}]`
pub fn powers<F: PrimeField>(elem: &F, count: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(count);
    if count > 0 {
        powers.push(F::one());
    }
    for i in 1..count {
        powers.push(powers[i - 1] * elem);
    }
    powers
}
