/*
 * @Description  : 数值梯度检验工具：用中心差分近似梯度，与各层反向传播给出的解析梯度对照
 */

use crate::tensor::Tensor;

/// 对标量函数`f`在`x`处求数值梯度：(f(x + h) - f(x - h)) / 2h，逐元素进行
pub fn eval_numerical_gradient<F>(mut f: F, x: &Tensor, h: f64) -> Tensor
where
    F: FnMut(&Tensor) -> f64,
{
    let mut x = x.clone();
    let mut grad = Tensor::zeros_like(&x);
    for i in 0..x.size() {
        let old_value = x.as_slice_mut()[i];
        x.as_slice_mut()[i] = old_value + h;
        let pos = f(&x);
        x.as_slice_mut()[i] = old_value - h;
        let neg = f(&x);
        x.as_slice_mut()[i] = old_value;

        grad.as_slice_mut()[i] = (pos - neg) / (2.0 * h);
    }
    grad
}

/// 对输出为张量的函数`f`求数值梯度，上游梯度为`df`：
/// 相当于对标量`sum(f(x) ⊙ df)`关于x求导
pub fn eval_numerical_gradient_array<F>(mut f: F, x: &Tensor, df: &Tensor, h: f64) -> Tensor
where
    F: FnMut(&Tensor) -> Tensor,
{
    eval_numerical_gradient(|x| f(x).dot_sum(df), x, h)
}

/// 相对误差：max(|a - b| / max(1e-8, |a| + |b|))
pub fn rel_error(a: &Tensor, b: &Tensor) -> f64 {
    assert!(
        a.is_same_shape(b),
        "{}",
        crate::errors::TensorError::InconsistentShape {
            tensor1_shape: a.shape().to_vec(),
            tensor2_shape: b.shape().to_vec(),
        }
    );
    a.zip_map(b, |x, y| (x - y).abs() / (x.abs() + y.abs()).max(1e-8))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_numerical_gradient_of_quadratic() {
        // f(x) = Σ x_i²，梯度为 2x
        let x = Tensor::new(&[1.0, -2.0, 0.5, 3.0], &[2, 2]);
        let grad = eval_numerical_gradient(|x| x.dot_sum(x), &x, 1e-5);
        assert_abs_diff_eq!(grad, &x * 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_numerical_gradient_array_with_upstream() {
        // f(x) = 3x，上游梯度df时梯度为 3·df
        let x = Tensor::new(&[0.1, 0.2, 0.3], &[3]);
        let df = Tensor::new(&[1.0, -1.0, 2.0], &[3]);
        let grad = eval_numerical_gradient_array(|x| x * 3.0, &x, &df, 1e-5);
        assert_abs_diff_eq!(grad, Tensor::new(&[3.0, -3.0, 6.0], &[3]), epsilon = 1e-8);
    }

    #[test]
    fn test_rel_error() {
        let a = Tensor::new(&[1.0, 2.0], &[2]);
        assert_eq!(rel_error(&a, &a), 0.0);
        let b = Tensor::new(&[1.0, 3.0], &[2]);
        // |2 - 3| / (2 + 3) = 0.2
        assert_abs_diff_eq!(rel_error(&a, &b), 0.2, epsilon = 1e-12);
        // 两者都为0时分母取1e-8，不会出现NaN
        let zeros = Tensor::zeros(&[2]);
        assert_eq!(rel_error(&zeros, &zeros), 0.0);
    }
}
