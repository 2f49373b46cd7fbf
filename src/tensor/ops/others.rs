use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use ndarray::{Axis, Zip};
use std::cmp::PartialEq;

impl From<f64> for Tensor {
    /// 实现 From<f64> trait 用于将`f64`类型转换为形状为`[1]`的张量
    fn from(scalar: f64) -> Self {
        Self::new(&[scalar], &[1])
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 对张量中的所有元素求和
    pub fn sum(&self) -> f64 {
        self.data.sum()
    }

    /// 沿指定轴求和，结果张量少一个维度（如(N, M)沿轴0求和得到(M,)）
    pub fn sum_axis(&self, axis: usize) -> Self {
        self.check_axis(axis);
        Self::from_array(self.data.sum_axis(Axis(axis)))
    }

    /// 所有元素中的最大值；空张量返回负无穷
    pub fn max(&self) -> f64 {
        self.data.fold(f64::NEG_INFINITY, |m, &v| m.max(v))
    }

    /// 逐元素映射，返回新张量
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            data: self.data.mapv(f),
        }
    }

    /// 与形状严格一致的另一个张量逐元素组合，返回新张量
    ///
    /// # 示例
    /// ```
    /// use naive_cnn::tensor::Tensor;
    /// let x = Tensor::new(&[-1.0, 0.0, 2.0], &[3]);
    /// let dout = Tensor::new(&[5.0, 6.0, 7.0], &[3]);
    /// // 类似 np.where(x > 0, dout, 0)
    /// let dx = dout.zip_map(&x, |g, v| if v > 0.0 { g } else { 0.0 });
    /// assert_eq!(dx, Tensor::new(&[0.0, 0.0, 7.0], &[3]));
    /// ```
    pub fn zip_map<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        assert!(
            self.is_same_shape(other),
            "{}",
            TensorError::InconsistentShape {
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            }
        );
        Self {
            data: Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|&a, &b| f(a, b)),
        }
    }

    /// 对两个形状严格一致的张量逐元素相乘，然后对结果求和。
    /// 这里`dot_sum`（点积和）的概念拓展自线性代数中向量内积的概念。
    pub fn dot_sum(&self, other: &Self) -> f64 {
        assert!(
            self.is_same_shape(other),
            "{}",
            TensorError::OperatorError {
                operator: Operator::DotSum,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            }
        );
        Zip::from(&self.data)
            .and(&other.data)
            .fold(0.0, |acc, &a, &b| acc + a * b)
    }

    fn check_axis(&self, axis: usize) {
        assert!(
            axis < self.dimension(),
            "{}",
            TensorError::AxisOutOfRange {
                axis,
                dimension: self.dimension(),
            }
        );
    }
}
