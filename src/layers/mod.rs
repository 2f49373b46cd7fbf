//! # 网络层
//!
//! 每种层都是一对互相独立的纯函数：前向传播返回输出与缓存，反向传播读取该缓存并返回梯度。
//! 缓存归调用方所有，且只应交给与之配对的那一次反向传播调用。
//! 把各层串成网络、按相反顺序调用反向传播，都是调用方的事情。

use serde::de::DeserializeOwned;

use crate::errors::LayerError;

mod affine;
mod conv;
mod dropout;
mod loss;
mod pool;
mod relu;
mod window;

#[cfg(test)]
mod tests;

pub use affine::{affine_backward, affine_forward, AffineCache, AffineGrads};
pub use conv::{conv_backward_naive, conv_forward_naive, ConvCache, ConvGrads, ConvParam};
pub use dropout::{dropout_backward, dropout_forward, DropoutCache, DropoutMode, DropoutParam};
pub use loss::{softmax, softmax_loss, svm_loss};
pub use pool::{max_pool_backward_naive, max_pool_forward_naive, PoolCache, PoolParam};
pub use relu::{relu_backward, relu_forward, ReluCache};

/// 从JSON对象解析层参数，键名与参数结构体的字段一致，如：
///
/// ```
/// use naive_cnn::layers::{param_from_json, ConvParam};
/// let param: ConvParam = param_from_json(r#"{"stride": 2, "pad": 1}"#).unwrap();
/// assert_eq!(param, ConvParam::new(2, 1));
/// ```
pub fn param_from_json<T: DeserializeOwned>(json: &str) -> Result<T, LayerError> {
    Ok(serde_json::from_str(json)?)
}
