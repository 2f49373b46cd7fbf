/*
 * @Description  : 用各层的解析梯度做梯度下降，检验前向/反向传播能在训练流程中配合使用：
 *                 对代理损失 0.5·‖out - target‖² 或分类损失，更新参数后损失都应下降
 */
use naive_cnn::errors::LayerError;
use naive_cnn::layers::{
    affine_backward, affine_forward, conv_backward_naive, conv_forward_naive, softmax_loss,
    svm_loss, ConvParam,
};
use naive_cnn::random::SeededRng;
use naive_cnn::tensor::Tensor;

type LossFn = fn(&Tensor, &[usize]) -> Result<(f64, Tensor), LayerError>;

fn randn(shape: &[usize], seed: u64) -> Tensor {
    let mut rng = SeededRng::from_seed(seed);
    Tensor::new_normal(0.0, 1.0, shape, &mut rng)
}

/// 代理损失 0.5·‖out - target‖² 及其关于out的梯度
fn proxy_loss(out: &Tensor, target: &Tensor) -> (f64, Tensor) {
    let diff = out - target;
    (0.5 * diff.dot_sum(&diff), diff)
}

/// 沿负梯度方向走一步
fn sgd_step(param: &Tensor, grad: &Tensor, learning_rate: f64) -> Tensor {
    param - &(grad * learning_rate)
}

#[test]
fn test_affine_gradient_descent() -> Result<(), LayerError> {
    let x = randn(&[4, 5], 1);
    let target = randn(&[4, 3], 2);
    let mut w = randn(&[5, 3], 3);
    let mut b = randn(&[3], 4);

    let mut last_loss = f64::INFINITY;
    for _ in 0..20 {
        let (out, cache) = affine_forward(&x, &w, &b)?;
        let (loss, dout) = proxy_loss(&out, &target);
        assert!(loss < last_loss, "损失没有下降：{last_loss} -> {loss}");
        last_loss = loss;

        let grads = affine_backward(&dout, &cache)?;
        w = sgd_step(&w, &grads.dw, 0.01);
        b = sgd_step(&b, &grads.db, 0.01);
    }
    Ok(())
}

#[test]
fn test_conv_gradient_descent() -> Result<(), LayerError> {
    let x = randn(&[2, 3, 6, 6], 11);
    let target = randn(&[2, 4, 6, 6], 12);
    let mut w = randn(&[4, 3, 3, 3], 13) * 0.1;
    let mut b = Tensor::zeros(&[4]);
    let param = ConvParam::new(1, 1);

    let mut last_loss = f64::INFINITY;
    for _ in 0..10 {
        let (out, cache) = conv_forward_naive(&x, &w, &b, &param)?;
        let (loss, dout) = proxy_loss(&out, &target);
        assert!(loss < last_loss, "损失没有下降：{last_loss} -> {loss}");
        last_loss = loss;

        let grads = conv_backward_naive(&dout, &cache)?;
        w = sgd_step(&w, &grads.dw, 1e-3);
        b = sgd_step(&b, &grads.db, 1e-3);
    }
    Ok(())
}

#[test]
fn test_input_gradient_descent() -> Result<(), LayerError> {
    // 固定参数、只更新输入：dx的方向同样须正确
    let mut x = randn(&[3, 2, 4], 21);
    let w = randn(&[8, 2], 22);
    let b = randn(&[2], 23);
    let target = randn(&[3, 2], 24);

    let (out, _) = affine_forward(&x, &w, &b)?;
    let (initial_loss, _) = proxy_loss(&out, &target);
    for _ in 0..10 {
        let (out, cache) = affine_forward(&x, &w, &b)?;
        let (_, dout) = proxy_loss(&out, &target);
        let grads = affine_backward(&dout, &cache)?;
        x = sgd_step(&x, &grads.dx, 0.01);
    }
    let (out, _) = affine_forward(&x, &w, &b)?;
    let (final_loss, _) = proxy_loss(&out, &target);
    assert!(final_loss < initial_loss);
    Ok(())
}

#[test]
fn test_linear_classifier_losses_decrease() -> Result<(), LayerError> {
    let x = randn(&[20, 6], 31);
    let y: Vec<usize> = (0..20).map(|i| i % 4).collect();

    let loss_fns: [(&str, LossFn); 2] = [("svm", svm_loss), ("softmax", softmax_loss)];
    for (name, loss_fn) in loss_fns {
        let mut w = randn(&[6, 4], 32) * 0.01;
        let mut b = Tensor::zeros(&[4]);
        let mut losses = Vec::new();
        for _ in 0..30 {
            let (scores, cache) = affine_forward(&x, &w, &b)?;
            let (loss, dscores) = loss_fn(&scores, &y)?;
            losses.push(loss);
            let grads = affine_backward(&dscores, &cache)?;
            w = sgd_step(&w, &grads.dw, 0.05);
            b = sgd_step(&b, &grads.db, 0.05);
        }
        let (first, last) = (losses[0], losses[losses.len() - 1]);
        assert!(last < first, "{name}损失没有下降：{first} -> {last}");
    }
    Ok(())
}
