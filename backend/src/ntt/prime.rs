/// 2^64 - 2^32 + 1. Its multiplicative group has order 2^32 * (2^32 - 1), so it
/// holds 2N-th roots of unity for every ring degree used here.
pub const Q: u64 = 0xFFFF_FFFF_0000_0001;

/// Generator of the multiplicative group of Z_Q.
pub const GENERATOR: u64 = 7;

#[inline(always)]
pub fn add_mod(a: u64, b: u64) -> u64 {
    let (s, carry) = a.overflowing_add(b);
    if carry || s >= Q { s.wrapping_sub(Q) } else { s }
}

#[inline(always)]
pub fn sub_mod(a: u64, b: u64) -> u64 {
    if a >= b { a - b } else { a.wrapping_sub(b).wrapping_add(Q) }
}

#[inline(always)]
pub fn mul_mod(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % Q as u128) as u64
}

pub fn pow_mod(mut x: u64, mut e: u64) -> u64 {
    let mut acc: u64 = 1;
    while e > 0 {
        if e & 1 == 1 {
            acc = mul_mod(acc, x);
        }
        x = mul_mod(x, x);
        e >>= 1;
    }
    acc
}

#[inline(always)]
pub fn inv_mod(x: u64) -> u64 {
    debug_assert!(x != 0, "cannot invert 0");
    pow_mod(x, Q - 2)
}

/// Embeds a signed word into Z_Q.
#[inline(always)]
pub fn from_i32(x: i32) -> u64 {
    if x >= 0 { x as u64 } else { Q - x.unsigned_abs() as u64 }
}

/// Centered lift of `x` to (-Q/2, Q/2], reduced modulo 2^32.
#[inline(always)]
pub fn to_torus32(x: u64) -> i32 {
    if x > Q >> 1 { (x as i64).wrapping_sub(Q as i64) as i32 } else { x as i32 }
}
