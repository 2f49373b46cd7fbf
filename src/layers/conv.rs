/*
 * @Description  : 2D 卷积层（朴素嵌套循环实现）
 *
 * 设计决策：
 * - Batch-First 格式：输入必须是 4D [N, C, H, W]
 * - 卷积核：[F, C, HH, WW]，偏置：[F]
 * - 输出格式：[N, F, H', W']，H' = 1 + (H + 2·pad - HH) / stride（向下取整）
 * - 反向传播中 dx、dw、db 均从0开始累加：相邻输出位置的感受野互相重叠，
 *   同一个输入元素会收到多个输出位置的梯度
 */

use log::debug;
use ndarray::{s, Array1, Array4};
use serde::{Deserialize, Serialize};

use super::window::output_dim;
use crate::errors::LayerError;
use crate::tensor::Tensor;

/// 卷积参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvParam {
    /// 相邻感受野在水平与竖直方向上的间隔
    pub stride: usize,
    /// 输入在H、W两端各补0的数量
    pub pad: usize,
}

impl ConvParam {
    pub const fn new(stride: usize, pad: usize) -> Self {
        Self { stride, pad }
    }
}

#[derive(Debug, Clone)]
pub struct ConvCache {
    pub x: Tensor,
    pub w: Tensor,
    pub b: Tensor,
    pub param: ConvParam,
}

#[derive(Debug, Clone)]
pub struct ConvGrads {
    pub dx: Tensor,
    pub dw: Tensor,
    pub db: Tensor,
}

/// 校验输入并返回输出的空间尺寸(H', W')
fn conv_output_hw(
    x: &Tensor,
    w: &Tensor,
    b: &Tensor,
    param: &ConvParam,
) -> Result<(usize, usize), LayerError> {
    if x.dimension() != 4 {
        return Err(LayerError::DimensionMismatch {
            expected: 4,
            got: x.dimension(),
            message: "卷积输入x必须是 4D [N, C, H, W]".to_string(),
        });
    }
    if w.dimension() != 4 {
        return Err(LayerError::DimensionMismatch {
            expected: 4,
            got: w.dimension(),
            message: "卷积核w必须是 4D [F, C, HH, WW]".to_string(),
        });
    }
    let (c, h, width) = (x.shape()[1], x.shape()[2], x.shape()[3]);
    let (f, kc, hh, ww) = (w.shape()[0], w.shape()[1], w.shape()[2], w.shape()[3]);
    if kc != c {
        return Err(LayerError::ShapeMismatch {
            expected: vec![c],
            got: vec![kc],
            message: "卷积核的输入通道数须与x的通道数C一致".to_string(),
        });
    }
    if b.shape() != [f] {
        return Err(LayerError::ShapeMismatch {
            expected: vec![f],
            got: b.shape().to_vec(),
            message: "卷积偏置b的形状须为(F,)".to_string(),
        });
    }

    let out_h = output_dim("高", h, param.pad, hh, param.stride)?;
    let out_w = output_dim("宽", width, param.pad, ww, param.stride)?;
    Ok((out_h, out_w))
}

/// 卷积前向传播（朴素实现）
///
/// 对每个样本、每个输出位置、每个卷积核，取填充后输入中对应的[C, HH, WW]窗口，
/// 与卷积核逐元素相乘求和后再加上该卷积核的偏置。
pub fn conv_forward_naive(
    x: &Tensor,
    w: &Tensor,
    b: &Tensor,
    param: &ConvParam,
) -> Result<(Tensor, ConvCache), LayerError> {
    let (out_h, out_w) = conv_output_hw(x, w, b, param)?;
    let (n, f) = (x.shape()[0], w.shape()[0]);
    let (hh, ww) = (w.shape()[2], w.shape()[3]);
    let stride = param.stride;
    debug!(
        "卷积前向：输入{:?}，卷积核{:?}，{:?}，输出[{n}, {f}, {out_h}, {out_w}]",
        x.shape(),
        w.shape(),
        param
    );

    let x_padded = x.pad_spatial(param.pad);
    let x_padded = x_padded.view4();
    let kernels = w.view4();

    let mut out = Array4::<f64>::zeros((n, f, out_h, out_w));
    for ni in 0..n {
        for hi in 0..out_h {
            let hs = hi * stride;
            for wi in 0..out_w {
                let ws = wi * stride;
                let window = x_padded.slice(s![ni, .., hs..hs + hh, ws..ws + ww]);
                for fi in 0..f {
                    let kernel = kernels.slice(s![fi, .., .., ..]);
                    out[[ni, fi, hi, wi]] = (&window * &kernel).sum() + b[[fi]];
                }
            }
        }
    }

    let cache = ConvCache {
        x: x.clone(),
        w: w.clone(),
        b: b.clone(),
        param: *param,
    };
    Ok((Tensor::from_array(out), cache))
}

/// 卷积反向传播（朴素实现）
///
/// 对每个(样本, 卷积核, 输出位置)：
/// - `dx_padded`的对应窗口累加`w[f] * dout[n, f, h, w]`
/// - `dw[f]`累加`window * dout[n, f, h, w]`
/// - `db[f]`累加`dout[n, f, h, w]`
///
/// 最后把`dx_padded`裁掉填充部分得到dx。
pub fn conv_backward_naive(dout: &Tensor, cache: &ConvCache) -> Result<ConvGrads, LayerError> {
    let ConvCache { x, w, b, param } = cache;
    let (out_h, out_w) = conv_output_hw(x, w, b, param)?;
    let (n, c, h, width) = (x.shape()[0], x.shape()[1], x.shape()[2], x.shape()[3]);
    let (f, hh, ww) = (w.shape()[0], w.shape()[2], w.shape()[3]);
    let expected = [n, f, out_h, out_w];
    if dout.shape() != expected {
        return Err(LayerError::ShapeMismatch {
            expected: expected.to_vec(),
            got: dout.shape().to_vec(),
            message: "卷积上游梯度dout的形状须为(N, F, H', W')".to_string(),
        });
    }

    let stride = param.stride;
    let pad = param.pad;
    let x_padded = x.pad_spatial(pad);
    let x_padded = x_padded.view4();
    let kernels = w.view4();
    let dout = dout.view4();

    let mut dx_padded = Array4::<f64>::zeros((n, c, h + 2 * pad, width + 2 * pad));
    let mut dw = Array4::<f64>::zeros((f, c, hh, ww));
    let mut db = Array1::<f64>::zeros(f);

    for ni in 0..n {
        for fi in 0..f {
            let kernel = kernels.slice(s![fi, .., .., ..]);
            for hi in 0..out_h {
                let hs = hi * stride;
                for wi in 0..out_w {
                    let ws = wi * stride;
                    let grad = dout[[ni, fi, hi, wi]];
                    let window = x_padded.slice(s![ni, .., hs..hs + hh, ws..ws + ww]);

                    dx_padded
                        .slice_mut(s![ni, .., hs..hs + hh, ws..ws + ww])
                        .scaled_add(grad, &kernel);
                    dw.slice_mut(s![fi, .., .., ..]).scaled_add(grad, &window);
                    db[fi] += grad;
                }
            }
        }
    }

    Ok(ConvGrads {
        dx: Tensor::from_array(dx_padded).crop_spatial(pad),
        dw: Tensor::from_array(dw),
        db: Tensor::from_array(db),
    })
}
