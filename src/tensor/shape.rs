use super::Tensor;
use crate::errors::TensorError;
use ndarray::IxDyn;

impl Tensor {
    /// 改变张量形状，元素总数须保持不变
    pub fn reshape(&self, shape: &[usize]) -> Self {
        let total_elements: usize = self.data.len();
        let new_total_elements: usize = shape.iter().product();
        assert!(
            total_elements == new_total_elements,
            "{}",
            TensorError::IncompatibleShape
        );
        let data = self
            .data
            .as_standard_layout()
            .into_owned()
            .into_shape(IxDyn(shape))
            .unwrap_or_else(|_| panic!("{}", TensorError::IncompatibleShape));
        Self { data }
    }

    /// 将形状为(N, d_1, ..., d_k)的张量按样本展平为(N, D)，其中D = d_1·…·d_k。
    /// 对1阶张量(N,)，结果为(N, 1)，与`x.reshape(N, -1)`一致。
    pub fn flatten_rows(&self) -> Self {
        assert!(self.dimension() >= 1, "{}", TensorError::RankTooLow(1));
        let n = self.shape()[0];
        let d = self.shape()[1..].iter().product::<usize>();
        self.reshape(&[n, d])
    }

    /// 判断两个张量能否按 NumPy 规则广播：
    /// 从右向左对齐维度，每个维度须相等或其中一个为1
    pub fn can_broadcast_with(&self, other: &Self) -> bool {
        self.shape()
            .iter()
            .rev()
            .zip(other.shape().iter().rev())
            .all(|(&a, &b)| a == b || a == 1 || b == 1)
    }

    /// 张量的转置（交换前两个维度），不影响原张量
    pub fn transpose(&self) -> Self {
        if self.dimension() <= 1 {
            self.clone()
        } else {
            let mut axes: Vec<usize> = (0..self.dimension()).collect();
            axes.swap(0, 1);
            let permuted = self.data.clone().permuted_axes(IxDyn(&axes));
            Self {
                data: permuted.as_standard_layout().into_owned(),
            }
        }
    }
}
