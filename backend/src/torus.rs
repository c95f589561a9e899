/// An element of R/Z scaled by 2^32. All arithmetic wraps modulo 2^32.
pub type Torus32 = i32;

const TWO32: f64 = 4294967296.0;

/// Rounds the fractional part of `d` onto the 32-bit torus.
#[inline(always)]
pub fn dtot32(d: f64) -> Torus32 {
    ((d - d.trunc()) * TWO32).round() as i64 as Torus32
}

/// Real representative in [-1/2, 1/2) of a torus element.
#[inline(always)]
pub fn t32tod(x: Torus32) -> f64 {
    x as f64 / TWO32
}

/// Width of one of the `msize` slices of the torus, scaled by 2^64. `None`
/// for `msize == 1`, where the single slice is the whole torus.
#[inline(always)]
fn interval(msize: i32) -> Option<u64> {
    debug_assert!(msize > 0, "msize must be positive, got {msize}");
    ((1u64 << 63) / msize as u64).checked_mul(2)
}

/// Maps `mu` to the torus element `mu / msize`.
#[inline(always)]
pub fn mod_switch_to_torus32(mu: i32, msize: i32) -> Torus32 {
    let Some(interv) = interval(msize) else {
        return 0;
    };
    let phase64: u64 = (mu as i64 as u64).wrapping_mul(interv);
    (phase64 >> 32) as Torus32
}

/// Rounds `phase` to the closest multiple of `1 / msize`, returned as an
/// integer in [0, msize).
#[inline(always)]
pub fn mod_switch_from_torus32(phase: Torus32, msize: i32) -> i32 {
    let Some(interv) = interval(msize) else {
        return 0;
    };
    let half_interv: u64 = interv / 2;
    let phase64: u64 = ((phase as u32 as u64) << 32).wrapping_add(half_interv);
    (phase64 / interv) as i32
}
