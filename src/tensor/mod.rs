use ndarray::{Array, ArrayD, Dimension, IxDyn};
use serde::{Deserialize, Serialize};

use crate::errors::TensorError;
use crate::random::RandomSource;

mod ops {
    pub mod add;
    pub mod div;
    pub mod mat_mul;
    pub mod mul;
    pub mod others;
    pub mod sub;
}

mod compare;
mod index;
mod pad;
mod print;
mod property;
mod shape;

#[cfg(test)]
mod tests;

/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：只要通Tensor初始化的都是张量（即使标量也是张量）；
/// 而通常意义上的数字（类型为usize、f64等）就只是纯数（number），在这里不被认为是张量。
///
/// 内部数据始终保持标准（行优先）内存布局，各层可以放心地按扁平下标访问。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tensor {
    data: ArrayD<f64>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]、[1,1,1]...
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    pub fn new(data: &[f64], shape: &[usize]) -> Self {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap_or_else(|_| {
            panic!(
                "{}",
                TensorError::DataShapeMismatch {
                    data_len: data.len(),
                    shape: shape.to_vec(),
                }
            )
        });
        Self { data }
    }

    /// 从任意维度的`ndarray`数组构造张量
    pub fn from_array<D: Dimension>(array: Array<f64, D>) -> Self {
        let data = array.into_dyn();
        if data.is_standard_layout() {
            Self { data }
        } else {
            Self {
                data: data.as_standard_layout().into_owned(),
            }
        }
    }

    /// 创建一个全0张量
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::zeros(IxDyn(shape)),
        }
    }

    /// 创建一个全1张量
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::ones(IxDyn(shape)),
        }
    }

    /// 创建一个与`other`形状相同的全0张量
    pub fn zeros_like(other: &Self) -> Self {
        Self::zeros(other.shape())
    }

    /// 在[start, end]闭区间内等间距取`shape`所需个数的值，按行优先顺序填入张量。
    /// 与`np.linspace(start, end, num=size).reshape(shape)`一致，常用于构造可手算的测试数据。
    pub fn linspace(start: f64, end: f64, shape: &[usize]) -> Self {
        let size = shape.iter().product::<usize>();
        let data = Array::linspace(start, end, size).to_vec();
        Self::new(&data, shape)
    }

    /// 创建一个随机张量，其值服从[min, max)上的均匀分布。
    /// `rng`由调用方注入，因此给定种子时结果可复现。
    pub fn new_random<R: RandomSource + ?Sized>(
        min: f64,
        max: f64,
        shape: &[usize],
        rng: &mut R,
    ) -> Self {
        assert!(max >= min, "{}", TensorError::InvalidRange);
        let data = (0..shape.iter().product::<usize>())
            .map(|_| min + (max - min) * rng.uniform())
            .collect::<Vec<_>>();
        Self::new(&data, shape)
    }

    /// 创建一个服从正态分布的随机张量（Box-Muller变换）。
    pub fn new_normal<R: RandomSource + ?Sized>(
        mean: f64,
        std_dev: f64,
        shape: &[usize],
        rng: &mut R,
    ) -> Self {
        let data_len = shape.iter().product::<usize>();
        let mut data = Vec::with_capacity(data_len);

        while data.len() < data_len {
            let u1 = rng.uniform();
            let u2 = rng.uniform();
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f64::consts::PI * u2;
            let z0 = mean + std_dev * r * theta.cos();
            let z1 = mean + std_dev * r * theta.sin();

            if z0.is_finite() {
                data.push(z0);
            }
            if data.len() < data_len && z1.is_finite() {
                data.push(z1);
            }
        }

        Self::new(&data, shape)
    }
}
