/*
 * @Description  : 本类仅包含一些属性方法，不包含任何运算方法
 */

use super::Tensor;
use crate::errors::TensorError;
use ndarray::{ArrayD, ArrayView2, ArrayView4, ArrayViewD, Ix2, Ix4};

impl Tensor {
    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓快照/view↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
    pub fn view(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    /// 以2阶视图访问，非2阶张量会panic
    pub fn view2(&self) -> ArrayView2<'_, f64> {
        self.data
            .view()
            .into_dimensionality::<Ix2>()
            .unwrap_or_else(|_| panic!("{}", TensorError::DimensionMustBe(2)))
    }

    /// 以4阶视图访问（[N, C, H, W]），非4阶张量会panic
    pub fn view4(&self) -> ArrayView4<'_, f64> {
        self.data
            .view()
            .into_dimensionality::<Ix4>()
            .unwrap_or_else(|_| panic!("{}", TensorError::DimensionMustBe(4)))
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }
    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑快照/view↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]。
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 张量的维（dim）数、阶（rank）数
    /// 即`shape()`的元素个数--如：形状为`[]`的标量阶数为0，向量阶数为1，矩阵阶数为2，以此类推
    pub fn dimension(&self) -> usize {
        self.data.ndim()
    }

    /// 计算张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 判断两个张量的形状是否严格一致。如：形状为 [1, 4]，[1, 4]和[4]是不一致的，会返回false
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 判断张量是否为标量
    pub fn is_scalar(&self) -> bool {
        self.shape().is_empty() || self.shape().iter().all(|x| *x == 1)
    }

    /// 转化为纯数（number）。若为标量，则返回Some(number)，否则返回None
    pub fn number(&self) -> Option<f64> {
        if self.is_scalar() {
            self.data.iter().next().copied()
        } else {
            None
        }
    }

    /// 按行优先顺序复制出所有元素
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// 按行优先顺序的可变扁平切片，数值梯度检验逐元素扰动时使用
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        if !self.data.is_standard_layout() {
            self.data = self.data.as_standard_layout().into_owned();
        }
        match self.data.as_slice_mut() {
            Some(slice) => slice,
            None => unreachable!("标准布局的数组必然可以取得连续切片"),
        }
    }
}
