/*
 * @Description  : 分类损失函数：多分类SVM（hinge）损失与softmax交叉熵损失。
 *                 两者都直接返回(损失, 关于得分x的梯度)，没有缓存，也没有单独的反向传播函数。
 *
 * 形状约定：
 * - x: [N, C]，x[i, j]为第i个样本在第j类上的得分
 * - y: 长度为N的标签，0 <= y[i] < C
 */

use ndarray::{Array2, Axis};

use crate::errors::LayerError;
use crate::tensor::Tensor;

/// 校验得分矩阵与标签，返回(N, C)
fn check_scores_and_labels(x: &Tensor, y: &[usize]) -> Result<(usize, usize), LayerError> {
    if x.dimension() != 2 {
        return Err(LayerError::DimensionMismatch {
            expected: 2,
            got: x.dimension(),
            message: "得分x必须是 2D [N, C]".to_string(),
        });
    }
    let (n, c) = (x.shape()[0], x.shape()[1]);
    if n == 0 {
        return Err(LayerError::InvalidParameter("批次大小N不能为0".to_string()));
    }
    if y.len() != n {
        return Err(LayerError::ShapeMismatch {
            expected: vec![n],
            got: vec![y.len()],
            message: "标签y的长度须等于样本数N".to_string(),
        });
    }
    if let Some((index, &label)) = y.iter().enumerate().find(|&(_, &label)| label >= c) {
        return Err(LayerError::LabelOutOfRange {
            index,
            label,
            num_classes: c,
        });
    }
    Ok((n, c))
}

/// 多分类SVM损失
///
/// 对第n个样本的第j类，margin = max(0, x[n, j] - x[n, y[n]] + 1)，正确类别的margin固定为0；
/// 损失为所有margin之和除以N。
/// 梯度：margin>0的位置为1，正确类别位置减去该样本margin>0的个数，最后整体除以N。
pub fn svm_loss(x: &Tensor, y: &[usize]) -> Result<(f64, Tensor), LayerError> {
    let (n, c) = check_scores_and_labels(x, y)?;
    let scores = x.view2();

    let mut loss = 0.0;
    let mut dx = Array2::<f64>::zeros((n, c));
    for (i, &label) in y.iter().enumerate() {
        let correct_score = scores[[i, label]];
        let mut num_positive = 0.0;
        for j in 0..c {
            if j == label {
                continue;
            }
            let margin = (scores[[i, j]] - correct_score + 1.0).max(0.0);
            if margin > 0.0 {
                loss += margin;
                dx[[i, j]] = 1.0;
                num_positive += 1.0;
            }
        }
        dx[[i, label]] -= num_positive;
    }

    let n = n as f64;
    Ok((loss / n, Tensor::from_array(dx) / n))
}

/// 按行计算数值稳定的softmax概率：先减去每行最大值再取指数
pub fn softmax(x: &Tensor) -> Result<Tensor, LayerError> {
    if x.dimension() != 2 {
        return Err(LayerError::DimensionMismatch {
            expected: 2,
            got: x.dimension(),
            message: "softmax 输入必须是 2D [N, C]".to_string(),
        });
    }
    Ok(Tensor::from_array(stable_softmax(&x.view2().to_owned())))
}

fn stable_softmax(scores: &Array2<f64>) -> Array2<f64> {
    let mut probs = scores.clone();
    for mut row in probs.axis_iter_mut(Axis(0)) {
        let max_val = row.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        row.mapv_inplace(|v| (v - max_val).exp());
        let sum_exp = row.sum();
        row.mapv_inplace(|v| v / sum_exp);
    }
    probs
}

/// softmax交叉熵损失
///
/// 损失为正确类别概率负对数的均值；梯度为`(softmax(x) - one_hot(y)) / N`。
pub fn softmax_loss(x: &Tensor, y: &[usize]) -> Result<(f64, Tensor), LayerError> {
    let (n, _) = check_scores_and_labels(x, y)?;
    let mut probs = stable_softmax(&x.view2().to_owned());

    let mut loss = 0.0;
    for (i, &label) in y.iter().enumerate() {
        loss -= probs[[i, label]].ln();
        probs[[i, label]] -= 1.0;
    }

    let n = n as f64;
    Ok((loss / n, Tensor::from_array(probs) / n))
}
