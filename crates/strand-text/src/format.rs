//! 两遍格式化基元：先测量、再按预算渲染。
//!
//! # 模块定位（Why）
//! - 格式化构造与格式化追加都要求“分配一次、尺寸精确”，
//!   因此渲染被拆成两遍：第一遍只统计字节数，第二遍在既定预算内落盘。
//! - 预算由测量值给出；第二遍若超出预算（参数的 `Display` 实现
//!   两次输出不一致）同样按格式化失败处理，保证预留空间不被击穿。

use alloc::vec::Vec;
use core::fmt::{self, Write};

use strand_core::error::{CoreError, codes};
use strand_core::Result;

/// 只统计字节数、不落盘的测量写入器。
#[derive(Default)]
struct MeasureWriter {
    written: usize,
}

impl Write for MeasureWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.written = self.written.checked_add(s.len()).ok_or(fmt::Error)?;
        Ok(())
    }
}

/// 第一遍：测量 `args` 渲染后的精确字节数。
///
/// 参数的 `Display`/`Debug` 实现报告失败（或累计长度溢出）时
/// 返回 [`codes::TEXT_FORMAT`]。
pub(crate) fn measure(args: fmt::Arguments<'_>) -> Result<usize> {
    let mut probe = MeasureWriter::default();
    fmt::write(&mut probe, args)
        .map_err(|_| CoreError::new(codes::TEXT_FORMAT, "measure: 格式化测量阶段报告失败"))?;
    Ok(probe.written)
}

/// 把渲染结果追加进 `sink`、超出预算即失败的受限写入器。
struct BoundedWriter<'a> {
    sink: &'a mut Vec<u8>,
    budget: usize,
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.len() > self.budget {
            return Err(fmt::Error);
        }
        self.budget -= s.len();
        self.sink.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// 第二遍：在 `budget` 字节预算内把 `args` 渲染进 `sink`。
///
/// 调用方需保证 `sink` 已预留不少于 `budget` 字节的追加空间，
/// 本函数自身不触发再分配；失败时 `sink` 可能已追加部分字节，
/// 回滚责任在调用方（见 `TextBuffer::append_format`）。
pub(crate) fn render_into(
    sink: &mut Vec<u8>,
    budget: usize,
    args: fmt::Arguments<'_>,
) -> Result<()> {
    let mut writer = BoundedWriter { sink, budget };
    fmt::write(&mut writer, args)
        .map_err(|_| CoreError::new(codes::TEXT_FORMAT, "render: 格式化渲染阶段报告失败"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_counts_exact_bytes() {
        let measured = measure(format_args!("{}-{}", "ab", 12)).expect("测量应成功");
        assert_eq!(measured, 5);
    }

    #[test]
    fn render_fills_sink_within_budget() {
        let mut sink = Vec::new();
        render_into(&mut sink, 5, format_args!("{}-{}", "ab", 12)).expect("渲染应成功");
        assert_eq!(sink, b"ab-12");
    }

    #[test]
    fn render_rejects_budget_overrun() {
        let mut sink = Vec::new();
        let err = render_into(&mut sink, 3, format_args!("abcdef")).expect_err("超预算应失败");
        assert_eq!(err.code(), codes::TEXT_FORMAT);
    }
}
