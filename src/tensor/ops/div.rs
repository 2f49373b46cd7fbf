use crate::errors::TensorError;
use crate::tensor::Tensor;
use std::ops::Div;

impl Div<f64> for Tensor {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        assert!(scalar != 0., "{}", TensorError::DivByZero);
        Self {
            data: self.data / scalar,
        }
    }
}

impl Div<f64> for &Tensor {
    type Output = Tensor;

    fn div(self, scalar: f64) -> Tensor {
        assert!(scalar != 0., "{}", TensorError::DivByZero);
        Tensor {
            data: &self.data / scalar,
        }
    }
}
