/*
 * @Description  : dropout 层的前向与反向传播
 *
 * 设计决策：
 * - 每个元素以概率 p 保留（u <= p，u ~ U[0, 1)），否则置0
 * - 保留下来的元素不做 1/p 缩放，训练与测试阶段输出的期望值因此相差一个因子 p
 * - 随机源由调用方注入；配置里带`seed`时会先用它重新播种，便于梯度检验时复现掩码
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::LayerError;
use crate::random::RandomSource;
use crate::tensor::Tensor;

/// dropout 的运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropoutMode {
    Train,
    Test,
}

/// dropout 配置，字段名与常见的`{"p": .., "mode": .., "seed": ..}`字典一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropoutParam {
    /// 每个元素被保留的概率，取值须在(0, 1]内；JSON中也可写作`probability_keep`
    #[serde(alias = "probability_keep")]
    pub p: f64,
    pub mode: DropoutMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl DropoutParam {
    pub fn train(p: f64) -> Self {
        Self {
            p,
            mode: DropoutMode::Train,
            seed: None,
        }
    }

    pub fn test(p: f64) -> Self {
        Self {
            p,
            mode: DropoutMode::Test,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// dropout 前向传播的缓存：配置本身，以及 train 模式下采样得到的0/1掩码（test 模式为`None`）
#[derive(Debug, Clone)]
pub struct DropoutCache {
    pub param: DropoutParam,
    pub mask: Option<Tensor>,
}

pub fn dropout_forward<R: RandomSource + ?Sized>(
    x: &Tensor,
    param: &DropoutParam,
    rng: &mut R,
) -> Result<(Tensor, DropoutCache), LayerError> {
    if !(param.p > 0.0 && param.p <= 1.0) {
        return Err(LayerError::InvalidParameter(format!(
            "dropout 的保留概率p须在(0, 1]内，实际为{}",
            param.p
        )));
    }
    if let Some(seed) = param.seed {
        debug!("dropout 使用种子{seed}重新播种随机源");
        rng.reseed(seed);
    }

    let (out, mask) = match param.mode {
        DropoutMode::Train => {
            let keep = (0..x.size())
                .map(|_| if rng.uniform() <= param.p { 1.0 } else { 0.0 })
                .collect::<Vec<_>>();
            let mask = Tensor::new(&keep, x.shape());
            (x * &mask, Some(mask))
        }
        DropoutMode::Test => (x.clone(), None),
    };

    let cache = DropoutCache {
        param: param.clone(),
        mask,
    };
    Ok((out, cache))
}

pub fn dropout_backward(dout: &Tensor, cache: &DropoutCache) -> Result<Tensor, LayerError> {
    match cache.param.mode {
        DropoutMode::Train => {
            let mask = cache.mask.as_ref().ok_or(LayerError::ModeMismatch)?;
            if !dout.is_same_shape(mask) {
                return Err(LayerError::ShapeMismatch {
                    expected: mask.shape().to_vec(),
                    got: dout.shape().to_vec(),
                    message: "dropout 上游梯度dout须与掩码形状一致".to_string(),
                });
            }
            Ok(dout * mask)
        }
        DropoutMode::Test => Ok(dout.clone()),
    }
}
