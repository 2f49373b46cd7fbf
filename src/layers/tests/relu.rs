use super::{assert_grad_close, randn, H};
use crate::assert_err;
use crate::errors::LayerError;
use crate::layers::{relu_backward, relu_forward};
use crate::tensor::Tensor;
use crate::utils::gradient_check::eval_numerical_gradient_array;
use approx::assert_abs_diff_eq;

#[test]
fn test_relu_forward() {
    let x = Tensor::linspace(-0.5, 0.5, &[3, 4]);
    let (out, cache) = relu_forward(&x);

    #[rustfmt::skip]
    let expected = Tensor::new(&[
        0.0,        0.0,        0.0,        0.0,
        0.0,        0.0,        0.04545455, 0.13636364,
        0.22727273, 0.31818182, 0.40909091, 0.5,
    ], &[3, 4]);
    assert_abs_diff_eq!(out, expected, epsilon = 1e-8);
    // 缓存的是激活前的输入
    assert_eq!(cache.x, x);
}

#[test]
fn test_relu_forward_keeps_positive_values_exactly() {
    let x = randn(&[4, 5], 21);
    let (out, _) = relu_forward(&x);
    for (o, v) in out.to_vec().iter().zip(x.to_vec()) {
        if v > 0.0 {
            assert_eq!(*o, v);
        } else {
            assert_eq!(*o, 0.0);
        }
    }
}

#[test]
fn test_relu_backward_zeroes_non_positive_inputs() {
    // 输入恰好为0的位置同样被置0
    let x = Tensor::new(&[-1.0, 0.0, 2.0, -0.5, 3.0, 0.0], &[2, 3]);
    let dout = Tensor::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let dout_before = dout.clone();

    let (_, cache) = relu_forward(&x);
    let dx = relu_backward(&dout, &cache).unwrap();

    assert_eq!(dx, Tensor::new(&[0.0, 0.0, 3.0, 0.0, 5.0, 0.0], &[2, 3]));
    // 调用方的dout不被修改
    assert_eq!(dout, dout_before);
}

#[test]
fn test_relu_backward_numerical() {
    let x = randn(&[10, 10], 22);
    let dout = randn(&[10, 10], 23);

    let dx_num = eval_numerical_gradient_array(|x| relu_forward(x).0, &x, &dout, H);
    let (_, cache) = relu_forward(&x);
    let dx = relu_backward(&dout, &cache).unwrap();

    assert_grad_close(&dx, &dx_num);
}

#[test]
fn test_relu_backward_shape_error() {
    let (_, cache) = relu_forward(&Tensor::zeros(&[2, 3]));
    let dout = Tensor::zeros(&[3, 2]);
    assert_err!(
        relu_backward(&dout, &cache),
        LayerError::ShapeMismatch([2, 3], [3, 2], "ReLU 上游梯度dout须与输入x形状一致")
    );
}
