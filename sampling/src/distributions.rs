use crate::source::Source;

/// Fills `res` with words uniform over the signed 32-bit range.
pub fn fill_uniform_i32(source: &mut Source, res: &mut [i32]) {
    res.iter_mut().for_each(|x| *x = source.next_i32());
}

/// Fills `res` with independent uniform bits.
pub fn fill_binary(source: &mut Source, res: &mut [i32]) {
    res.iter_mut().for_each(|x| *x = source.next_bit());
}

/// Fills `res` with centered normal samples of standard deviation `sigma`.
pub fn fill_normal(source: &mut Source, sigma: f64, res: &mut [f64]) {
    res.iter_mut().for_each(|x| *x = source.next_normal(sigma));
}

/// Subtracts the empirical mean so that the samples sum to (numerically) zero.
pub fn recenter(res: &mut [f64]) {
    if res.is_empty() {
        return;
    }
    let mean: f64 = res.iter().sum::<f64>() / res.len() as f64;
    res.iter_mut().for_each(|x| *x -= mean);
}
