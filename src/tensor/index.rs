use super::Tensor;
use std::ops::{Index, IndexMut};

// 引用式索引，如`x[[n, c, h, w]]`；下标个数须与张量阶数一致，越界会panic
impl<const N: usize> Index<[usize; N]> for Tensor {
    type Output = f64;

    fn index(&self, indices: [usize; N]) -> &Self::Output {
        &self.data[&indices[..]]
    }
}

impl<const N: usize> IndexMut<[usize; N]> for Tensor {
    fn index_mut(&mut self, indices: [usize; N]) -> &mut Self::Output {
        &mut self.data[&indices[..]]
    }
}
