use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    #[error("随机区间无效：下界须不大于上界")]
    InvalidRange,
    #[error("张量至少需要{0}阶")]
    RankTooLow(usize),
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },

    #[error("张量数据长度{data_len}与形状{shape:?}不符")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },
    #[error("张量形状不一致：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}")]
    InconsistentShape {
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("张量形状不兼容")]
    IncompatibleShape,
    #[error("输入的张量维度必须为{0}")]
    DimensionMustBe(usize),
    #[error("轴{axis}超出张量维数{dimension}")]
    AxisOutOfRange { axis: usize, dimension: usize },
    #[error("除数为零")]
    DivByZero,
}

/// 各层前向/反向传播的前置条件错误
///
/// 各层在真正计算前统一检查输入，形状不符时返回具体的出错位置，而不是在数组运算中途崩溃。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayerError {
    #[error("{message}：期望形状{expected:?}，实际为{got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    #[error("{message}：期望{expected}维，实际为{got}维")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        message: String,
    },
    #[error("参数无效：{0}")]
    InvalidParameter(String),
    #[error("第{index}个样本的标签{label}不在[0, {num_classes})范围内")]
    LabelOutOfRange {
        index: usize,
        label: usize,
        num_classes: usize,
    },
    #[error("dropout缓存与模式不符：train模式下缓存中缺少掩码")]
    ModeMismatch,
    #[error("参数配置解析失败：{0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for LayerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
