/*
 * @Description  : 可注入的随机源。dropout 采样与随机张量初始化都从这里取数，
 *                 调用方显式传入，不依赖进程级的全局随机状态。
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// 能够重新播种的均匀分布随机源
pub trait RandomSource {
    /// 返回[0, 1)上均匀分布的一个样本
    fn uniform(&mut self) -> f64;

    /// 用给定种子重置内部状态，此后的样本序列完全确定
    fn reseed(&mut self, seed: u64);
}

/// 基于`StdRng`的默认随机源
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    /// 有种子时可复现，否则从系统熵初始化
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomSource for SeededRng {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
