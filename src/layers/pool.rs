/*
 * @Description  : 2D 最大池化层（朴素嵌套循环实现）
 *
 * 设计决策：
 * - Batch-First 格式：输入必须是 4D [N, C, H, W]，输出为 [N, C, H', W']
 * - 无填充，H' = 1 + (H - pool_height) / stride（向下取整）
 * - 反向传播不记录argmax下标，而是重新计算每个窗口的最大值m，
 *   窗口内所有等于m的位置都拿到完整的上游梯度（并列最大值不平分）
 * - stride < 池化窗口时相邻窗口重叠，重叠处的梯度累加而不是覆盖
 */

use ndarray::{s, Array4, Zip};
use serde::{Deserialize, Serialize};

use super::window::output_dim;
use crate::errors::LayerError;
use crate::tensor::Tensor;

/// 池化参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolParam {
    pub pool_height: usize,
    pub pool_width: usize,
    /// 相邻池化窗口之间的间隔
    pub stride: usize,
}

impl PoolParam {
    pub const fn new(pool_height: usize, pool_width: usize, stride: usize) -> Self {
        Self {
            pool_height,
            pool_width,
            stride,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PoolCache {
    pub x: Tensor,
    pub param: PoolParam,
}

fn pool_output_hw(x: &Tensor, param: &PoolParam) -> Result<(usize, usize), LayerError> {
    if x.dimension() != 4 {
        return Err(LayerError::DimensionMismatch {
            expected: 4,
            got: x.dimension(),
            message: "最大池化输入x必须是 4D [N, C, H, W]".to_string(),
        });
    }
    let out_h = output_dim("高", x.shape()[2], 0, param.pool_height, param.stride)?;
    let out_w = output_dim("宽", x.shape()[3], 0, param.pool_width, param.stride)?;
    Ok((out_h, out_w))
}

/// 最大池化前向传播：每个输出位置取对应输入窗口内的最大值
pub fn max_pool_forward_naive(
    x: &Tensor,
    param: &PoolParam,
) -> Result<(Tensor, PoolCache), LayerError> {
    let (out_h, out_w) = pool_output_hw(x, param)?;
    let (n, c) = (x.shape()[0], x.shape()[1]);
    let PoolParam {
        pool_height,
        pool_width,
        stride,
    } = *param;

    let input = x.view4();
    let mut out = Array4::<f64>::zeros((n, c, out_h, out_w));
    for ni in 0..n {
        for ci in 0..c {
            for hi in 0..out_h {
                let hs = hi * stride;
                for wi in 0..out_w {
                    let ws = wi * stride;
                    let window = input.slice(s![ni, ci, hs..hs + pool_height, ws..ws + pool_width]);
                    out[[ni, ci, hi, wi]] = window.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
                }
            }
        }
    }

    let cache = PoolCache {
        x: x.clone(),
        param: *param,
    };
    Ok((Tensor::from_array(out), cache))
}

/// 最大池化反向传播：梯度只流向窗口内等于最大值的位置
pub fn max_pool_backward_naive(dout: &Tensor, cache: &PoolCache) -> Result<Tensor, LayerError> {
    let PoolCache { x, param } = cache;
    let (out_h, out_w) = pool_output_hw(x, param)?;
    let (n, c) = (x.shape()[0], x.shape()[1]);
    let expected = [n, c, out_h, out_w];
    if dout.shape() != expected {
        return Err(LayerError::ShapeMismatch {
            expected: expected.to_vec(),
            got: dout.shape().to_vec(),
            message: "最大池化上游梯度dout的形状须为(N, C, H', W')".to_string(),
        });
    }
    let PoolParam {
        pool_height,
        pool_width,
        stride,
    } = *param;

    let input = x.view4();
    let dout = dout.view4();
    let mut dx = Array4::<f64>::zeros(input.raw_dim());
    for ni in 0..n {
        for ci in 0..c {
            for hi in 0..out_h {
                let hs = hi * stride;
                for wi in 0..out_w {
                    let ws = wi * stride;
                    let grad = dout[[ni, ci, hi, wi]];
                    let window = input.slice(s![ni, ci, hs..hs + pool_height, ws..ws + pool_width]);
                    let m = window.fold(f64::NEG_INFINITY, |m, &v| m.max(v));

                    Zip::from(dx.slice_mut(s![ni, ci, hs..hs + pool_height, ws..ws + pool_width]))
                        .and(&window)
                        .for_each(|d, &v| {
                            if v == m {
                                *d += grad;
                            }
                        });
                }
            }
        }
    }

    Ok(Tensor::from_array(dx))
}
