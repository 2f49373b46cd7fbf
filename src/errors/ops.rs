use std::fmt;

/// 张量之间的二元运算，用于形状不兼容时的报错信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    MatMul,
    DotSum,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "逐元素相加",
            Self::Sub => "逐元素相减",
            Self::Mul => "逐元素相乘",
            Self::MatMul => "矩阵相乘",
            Self::DotSum => "求点积和",
        })
    }
}
