use crate::random::SeededRng;
use crate::tensor::Tensor;
use approx::assert_relative_eq;

mod relu;

/// 中心差分的步长
const H: f64 = 1e-5;

/// 辅助函数：用固定种子生成标准正态分布的测试数据
fn randn(shape: &[usize], seed: u64) -> Tensor {
    let mut rng = SeededRng::from_seed(seed);
    Tensor::new_normal(0.0, 1.0, shape, &mut rng)
}

/// 辅助函数：比较解析梯度与数值梯度。
/// 绝对误差在1e-8以内，或相对误差在1e-6以内即视为一致
fn assert_grad_close(analytic: &Tensor, numeric: &Tensor) {
    assert_eq!(
        analytic.shape(),
        numeric.shape(),
        "形状不匹配: {:?} vs {:?}",
        analytic.shape(),
        numeric.shape()
    );
    assert_relative_eq!(analytic, numeric, epsilon = 1e-8, max_relative = 1e-6);
}
