use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

/// Uniform integer in `[0, bound)` by rejection sampling.
///
/// Candidates are drawn with exactly as many bits as `bound`, so each draw is
/// accepted with probability above one half. A zero bound yields zero.
pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    if bound.is_zero() {
        return BigUint::zero();
    }

    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = len as u64 * 8 - bits;
    let mut buf = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return candidate;
        }
    }
}
