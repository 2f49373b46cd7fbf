use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use std::ops::Sub;

impl Sub<f64> for Tensor {
    type Output = Self;

    fn sub(self, scalar: f64) -> Self {
        Self {
            data: self.data - scalar,
        }
    }
}
impl Sub<f64> for &Tensor {
    type Output = Tensor;

    fn sub(self, scalar: f64) -> Tensor {
        Tensor {
            data: &self.data - scalar,
        }
    }
}

impl Sub for Tensor {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        sub_within_tensors(&self, &other)
    }
}

impl<'a> Sub<&'a Self> for Tensor {
    type Output = Self;

    fn sub(self, other: &'a Self) -> Self {
        sub_within_tensors(&self, other)
    }
}

impl<'b> Sub<&'b Tensor> for &Tensor {
    type Output = Tensor;

    fn sub(self, other: &'b Tensor) -> Tensor {
        sub_within_tensors(self, other)
    }
}

fn sub_within_tensors(tensor_1: &Tensor, tensor_2: &Tensor) -> Tensor {
    assert!(
        tensor_1.can_broadcast_with(tensor_2),
        "{}",
        TensorError::OperatorError {
            operator: Operator::Sub,
            tensor1_shape: tensor_1.shape().to_vec(),
            tensor2_shape: tensor_2.shape().to_vec(),
        }
    );
    Tensor {
        data: &tensor_1.data - &tensor_2.data,
    }
}
