/*
 * @Description  : affine（全连接）层的前向与反向传播
 *
 * 形状约定：
 * - x: [N, d_1, ..., d_k]，每个样本先展平为长度 D = d_1·…·d_k 的行向量
 * - w: [D, M]
 * - b: [M]
 * - out: [N, M]
 */

use crate::errors::LayerError;
use crate::tensor::Tensor;

/// affine 层前向传播的缓存：原样保存输入、权重与偏置
#[derive(Debug, Clone)]
pub struct AffineCache {
    pub x: Tensor,
    pub w: Tensor,
    pub b: Tensor,
}

/// affine 层反向传播得到的三个梯度，形状分别与 x、w、b 一致
#[derive(Debug, Clone)]
pub struct AffineGrads {
    pub dx: Tensor,
    pub dw: Tensor,
    pub db: Tensor,
}

/// 计算 `out[n, :] = flatten(x[n]) · w + b`
pub fn affine_forward(
    x: &Tensor,
    w: &Tensor,
    b: &Tensor,
) -> Result<(Tensor, AffineCache), LayerError> {
    if x.dimension() < 1 {
        return Err(LayerError::DimensionMismatch {
            expected: 1,
            got: 0,
            message: "affine 输入x至少需要一个批次维度N".to_string(),
        });
    }
    if w.dimension() != 2 {
        return Err(LayerError::DimensionMismatch {
            expected: 2,
            got: w.dimension(),
            message: "affine 权重w必须是 2D [D, M]".to_string(),
        });
    }

    let x_rows = x.flatten_rows();
    let (d, m) = (w.shape()[0], w.shape()[1]);
    if x_rows.shape()[1] != d {
        return Err(LayerError::ShapeMismatch {
            expected: vec![x.shape()[0], d],
            got: x_rows.shape().to_vec(),
            message: "展平后的输入x与权重w的行数D不一致".to_string(),
        });
    }
    if b.shape() != [m] {
        return Err(LayerError::ShapeMismatch {
            expected: vec![m],
            got: b.shape().to_vec(),
            message: "偏置b的形状须为(M,)".to_string(),
        });
    }

    let out = x_rows.mat_mul(w) + b;
    let cache = AffineCache {
        x: x.clone(),
        w: w.clone(),
        b: b.clone(),
    };
    Ok((out, cache))
}

/// 根据上游梯度`dout`（[N, M]）计算 dx、dw、db
pub fn affine_backward(dout: &Tensor, cache: &AffineCache) -> Result<AffineGrads, LayerError> {
    let AffineCache { x, w, .. } = cache;
    let expected = [x.shape()[0], w.shape()[1]];
    if dout.shape() != expected {
        return Err(LayerError::ShapeMismatch {
            expected: expected.to_vec(),
            got: dout.shape().to_vec(),
            message: "affine 上游梯度dout的形状须为(N, M)".to_string(),
        });
    }

    let dx = dout.mat_mul(&w.transpose()).reshape(x.shape());
    let dw = x.flatten_rows().transpose().mat_mul(dout);
    let db = dout.sum_axis(0);

    Ok(AffineGrads { dx, dw, db })
}
