use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::MAX_CHUNK_HEIGHT;

/// 2D height field for noise terrain.
pub struct HeightSampler {
    noise: FastNoiseLite,
    base_height: f32,
    amplitude: f32,
}

impl HeightSampler {
    pub fn new(seed: i32, base_height: f32, amplitude: f32, frequency: f32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(frequency));
        Self {
            noise,
            base_height,
            amplitude,
        }
    }

    /// Surface height at world column `(x, z)`, clamped to `1..MAX_CHUNK_HEIGHT - 1`.
    pub fn height_at(&self, x: i32, z: i32) -> usize {
        let n = self.noise.get_noise_2d(x as f32, z as f32);
        let h = (self.base_height + n * self.amplitude).round();
        (h.max(1.0) as usize).min(MAX_CHUNK_HEIGHT - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_heights() {
        let a = HeightSampler::new(7, 40.0, 10.0, 0.03);
        let b = HeightSampler::new(7, 40.0, 10.0, 0.03);
        for x in -20..20 {
            assert_eq!(a.height_at(x, x * 3), b.height_at(x, x * 3));
        }
    }

    #[test]
    fn heights_stay_inside_the_world() {
        let s = HeightSampler::new(1, 300.0, 500.0, 0.1);
        let t = HeightSampler::new(1, -100.0, 50.0, 0.1);
        for x in -32..32 {
            let h = s.height_at(x, -x);
            assert!((1..MAX_CHUNK_HEIGHT - 1).contains(&h));
            assert_eq!(t.height_at(x, x), 1);
        }
    }
}
