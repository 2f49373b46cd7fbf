use crate::tensor::Tensor;
use std::fmt;

/// 以`[a, b, ...]`的形式输出一行数值，每个数占10位、保留6位小数
fn write_row<'a>(
    f: &mut fmt::Formatter,
    row: impl IntoIterator<Item = &'a f64>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in row.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value:10.6}")?;
    }
    write!(f, "]")
}

// 只完整展示0~2阶张量；更高阶的（如[N, C, H, W]特征图）只给出形状
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shape = self.shape();
        match self.dimension() {
            0 => {
                for value in self.data.iter() {
                    write!(f, "{value:10.6}")?;
                }
            }
            1 => write_row(f, self.data.iter())?,
            2 => {
                write!(f, "[")?;
                for (i, row) in self.view2().rows().into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", \n ")?;
                    }
                    write_row(f, row.iter())?;
                }
                write!(f, "]")?;
            }
            _ => {
                return writeln!(
                    f,
                    "<对于阶数大于二（rank>2）的张量（形状：{shape:?}）无法展示具体数据>"
                )
            }
        }
        writeln!(f, "\n形状: {shape:?}")
    }
}
