use sampling::{distributions, source::Source};

use crate::{Torus32, dtot32};

pub trait FillUniform {
    /// Fills with values uniform over the torus.
    fn fill_uniform(&mut self, source: &mut Source);
}

pub trait FillBinary {
    /// Fills with independent uniform bits.
    fn fill_binary(&mut self, source: &mut Source);
}

pub trait AddNormal {
    /// Adds a rounded normal sample of standard deviation `sigma` (in torus
    /// units) to every coefficient.
    fn add_normal(&mut self, source: &mut Source, sigma: f64);
}

impl FillUniform for [Torus32] {
    fn fill_uniform(&mut self, source: &mut Source) {
        distributions::fill_uniform_i32(source, self);
    }
}

impl FillBinary for [i32] {
    fn fill_binary(&mut self, source: &mut Source) {
        distributions::fill_binary(source, self);
    }
}

impl AddNormal for [Torus32] {
    fn add_normal(&mut self, source: &mut Source, sigma: f64) {
        self.iter_mut()
            .for_each(|x| *x = x.wrapping_add(dtot32(source.next_normal(sigma))));
    }
}

/// `message` plus a rounded normal sample of standard deviation `sigma`.
pub fn gaussian_torus32(source: &mut Source, message: Torus32, sigma: f64) -> Torus32 {
    message.wrapping_add(dtot32(source.next_normal(sigma)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::t32tod;

    #[test]
    fn add_normal_is_centered_on_message() {
        let mut source: Source = Source::new([0u8; 32]);
        let message: Torus32 = 1 << 29;
        let mut x: Vec<Torus32> = vec![message; 2048];
        x.add_normal(&mut source, 1e-4);
        let mean: f64 = x.iter().map(|v| t32tod(v.wrapping_sub(message))).sum::<f64>() / x.len() as f64;
        assert!(mean.abs() < 1e-5, "{mean}");
        assert!(x.iter().all(|v| t32tod(v.wrapping_sub(message)).abs() < 1e-3));
        assert_eq!(gaussian_torus32(&mut source, message, 0.0), message);
    }
}
