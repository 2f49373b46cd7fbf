/*
 * @Description  : 4阶张量[N, C, H, W]在空间维度（H、W）上的零填充与裁剪，供卷积层使用。
 *                 `pad == 0`时两者都退化为复制，不会像`x[:, :, pad:-pad, pad:-pad]`那样得到空数组。
 */

use super::Tensor;
use ndarray::{s, Array4};

impl Tensor {
    /// 在H、W两端各补`pad`个0，返回形状为[N, C, H+2·pad, W+2·pad]的新张量
    pub fn pad_spatial(&self, pad: usize) -> Self {
        let x = self.view4();
        if pad == 0 {
            return self.clone();
        }
        let (n, c, h, w) = x.dim();
        let mut padded = Array4::<f64>::zeros((n, c, h + 2 * pad, w + 2 * pad));
        padded
            .slice_mut(s![.., .., pad..pad + h, pad..pad + w])
            .assign(&x);
        Self::from_array(padded)
    }

    /// `pad_spatial`的逆操作：去掉H、W两端各`pad`行/列
    pub fn crop_spatial(&self, pad: usize) -> Self {
        let x = self.view4();
        if pad == 0 {
            return self.clone();
        }
        let (_, _, h, w) = x.dim();
        assert!(
            h >= 2 * pad && w >= 2 * pad,
            "{}",
            crate::errors::TensorError::IncompatibleShape
        );
        Self::from_array(x.slice(s![.., .., pad..h - pad, pad..w - pad]).to_owned())
    }
}
