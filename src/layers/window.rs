/*
 * @Description  : 卷积与池化共用的滑动窗口尺寸计算。
 *                 输出尺寸 = 1 + (input + 2·pad - kernel) / stride，向下取整；
 *                 不能整除时窗口覆盖不到输入的末尾几行/列，此时只记录警告而不报错。
 */

use crate::errors::LayerError;
use log::warn;

/// 计算单个空间维度上的输出尺寸
///
/// - `axis_name`: 仅用于错误与日志信息，如"高"、"宽"
pub(crate) fn output_dim(
    axis_name: &str,
    input: usize,
    pad: usize,
    kernel: usize,
    stride: usize,
) -> Result<usize, LayerError> {
    if stride == 0 {
        return Err(LayerError::InvalidParameter("stride必须大于0".to_string()));
    }
    if kernel == 0 {
        return Err(LayerError::InvalidParameter(format!(
            "窗口的{axis_name}必须大于0"
        )));
    }
    let padded = input + 2 * pad;
    if kernel > padded {
        return Err(LayerError::InvalidParameter(format!(
            "窗口的{axis_name}为{kernel}，超出了填充后输入的{axis_name}{padded}"
        )));
    }

    let span = padded - kernel;
    if span % stride != 0 {
        warn!(
            "输出{axis_name}不是整数：(输入{input} + 2×填充{pad} - 窗口{kernel}) / 步长{stride}有余数{}，\
             末尾{}行/列将被忽略",
            span % stride,
            span % stride
        );
    }
    Ok(1 + span / stride)
}

#[cfg(test)]
mod tests {
    use super::output_dim;
    use crate::assert_err;
    use crate::errors::LayerError;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    /// 把日志记录按线程收集起来，供断言是否发出了警告
    struct CaptureLogger;

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|r| {
                r.borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    /// 执行`f`并返回其间当前线程产生的warn级别日志
    fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
        });
        RECORDS.with(|r| r.borrow_mut().clear());
        let out = f();
        let warnings = RECORDS.with(|r| {
            r.borrow_mut()
                .drain(..)
                .filter(|(level, _)| *level == Level::Warn)
                .map(|(_, message)| message)
                .collect()
        });
        (out, warnings)
    }

    #[test]
    fn test_output_dim_warns_only_when_truncating() {
        let (dim, warnings) = capture_warnings(|| output_dim("宽", 5, 0, 2, 2));
        assert_eq!(dim.unwrap(), 2);
        assert_eq!(warnings.len(), 1, "截断时应恰好有一条警告：{warnings:?}");
        assert!(warnings[0].contains("宽") && warnings[0].contains("余数1"));

        let (dim, warnings) = capture_warnings(|| output_dim("高", 4, 1, 4, 2));
        assert_eq!(dim.unwrap(), 2);
        assert!(warnings.is_empty(), "整除时不应有警告：{warnings:?}");
    }

    #[test]
    fn test_output_dim_exact() {
        // 1 + (4 + 2 - 4) / 2 = 2
        assert_eq!(output_dim("高", 4, 1, 4, 2).unwrap(), 2);
        // 1 + (32 + 2 - 3) / 1 = 32
        assert_eq!(output_dim("宽", 32, 1, 3, 1).unwrap(), 32);
        // 池化：1 + (4 - 2) / 2 = 2
        assert_eq!(output_dim("高", 4, 0, 2, 2).unwrap(), 2);
    }

    #[test]
    fn test_output_dim_truncates_remainder() {
        // 1 + (5 - 2) / 2 = 1 + 1 = 2，余下的1列被丢弃
        assert_eq!(output_dim("宽", 5, 0, 2, 2).unwrap(), 2);
        // 1 + (7 + 2 - 3) / 4 = 1 + 1 = 2
        assert_eq!(output_dim("高", 7, 1, 3, 4).unwrap(), 2);
    }

    #[test]
    fn test_output_dim_invalid() {
        assert_err!(
            output_dim("高", 4, 0, 2, 0),
            LayerError::InvalidParameter("stride必须大于0")
        );
        assert_err!(output_dim("宽", 4, 0, 0, 1), LayerError::InvalidParameter(_));
        assert_err!(
            output_dim("高", 3, 0, 4, 1),
            LayerError::InvalidParameter(msg) if msg.contains("超出")
        );
    }
}
