use crate::errors::LayerError;
use crate::tensor::Tensor;

/// ReLU 前向传播的缓存：激活前的输入x（而非输出）
#[derive(Debug, Clone)]
pub struct ReluCache {
    pub x: Tensor,
}

/// 逐元素计算`max(0, x)`，输出形状与x相同
pub fn relu_forward(x: &Tensor) -> (Tensor, ReluCache) {
    let out = x.map(|v| v.max(0.0));
    (out, ReluCache { x: x.clone() })
}

/// 在缓存输入`x <= 0`的位置将梯度置0，其余位置原样传递。
///
/// 返回新的梯度张量，调用方传入的`dout`不会被修改。
pub fn relu_backward(dout: &Tensor, cache: &ReluCache) -> Result<Tensor, LayerError> {
    if !dout.is_same_shape(&cache.x) {
        return Err(LayerError::ShapeMismatch {
            expected: cache.x.shape().to_vec(),
            got: dout.shape().to_vec(),
            message: "ReLU 上游梯度dout须与输入x形状一致".to_string(),
        });
    }
    Ok(dout.zip_map(&cache.x, |g, x| if x <= 0.0 { 0.0 } else { g }))
}
