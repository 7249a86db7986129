//! JSON 字符串字面量转义构造。
//!
//! # 模块定位（Why）
//! - 把一段 7-bit ASCII 文本重渲染为带外层引号的 JSON 字符串字面量，
//!   是文本缓冲对接序列化边界时的常见需求。
//! - 输出尺寸在扫描阶段即可精确推导（每个控制字符膨胀为 6 字节、
//!   每个转义字符膨胀为 2 字节），因此与工作区其余路径一样
//!   坚持“先算尺寸、检查溢出、一次分配”。
//!
//! # 使用契约（What）
//! - 任何 ≥ 128 的字节都使整个操作失败（[`codes::TEXT_NON_ASCII`]），
//!   不产生部分结果；
//! - `\u00XX` 转义使用大写十六进制数字。

use alloc::vec::Vec;

use strand_core::error::{CoreError, codes};
use strand_core::{Result, mem};

use crate::text_buffer::{TextBuffer, c_content};

/// `\u00XX` 转义使用的大写十六进制数字表。
const HEX_UPPER: [u8; 16] = *b"0123456789ABCDEF";

/// 需要 2 字节短转义的字符集合：`"`、`\`、`/`。
fn needs_short_escape(byte: u8) -> bool {
    matches!(byte, b'"' | b'\\' | b'/')
}

impl TextBuffer {
    /// 把 `source` 渲染为 JSON 字符串字面量（含外层引号）构造缓冲。
    ///
    /// # 契约定义（What）
    /// - 控制字节（≤ 0x1F）渲染为 6 字符转义 `\u00XX`（大写十六进制）；
    /// - `"`、`\`、`/` 渲染为对应的 2 字符转义；其余字节原样复制；
    /// - 任何 ≥ 128 的字节使整个操作以 [`codes::TEXT_NON_ASCII`] 失败，
    ///   不产生部分结果；
    /// - 输出尺寸 `len + 5 * 控制字符数 + 转义字符数 + 3` 在分配前
    ///   逐步检查溢出（[`codes::MEMORY_OVERFLOW`]）。
    pub fn new_json(source: &str) -> Result<Self> {
        let src = c_content(source.as_bytes());

        let mut n_control = 0usize;
        let mut n_escape = 0usize;
        for (position, &byte) in src.iter().enumerate() {
            if byte >= 128 {
                return Err(CoreError::new(
                    codes::TEXT_NON_ASCII,
                    alloc::format!(
                        "new_json: 第 {position} 字节 0x{byte:02X} 超出 7-bit ASCII 范围"
                    ),
                ));
            }
            if byte <= 0x1F {
                n_control += 1;
            } else if needs_short_escape(byte) {
                n_escape += 1;
            }
        }

        // 尺寸链按 “len+3 → +转义数 → +5*控制符数” 的顺序逐步检查。
        let mut total = mem::flex_size(3, src.len(), 1)?;
        total = total.checked_add(n_escape).ok_or_else(|| {
            CoreError::new(
                codes::MEMORY_OVERFLOW,
                "new_json: 转义膨胀后的尺寸超出 usize 上限",
            )
        })?;
        let control_growth = mem::flex_size(0, n_control, 5)?;
        total = total.checked_add(control_growth).ok_or_else(|| {
            CoreError::new(
                codes::MEMORY_OVERFLOW,
                "new_json: 控制字符膨胀后的尺寸超出 usize 上限",
            )
        })?;

        let mut data = Vec::new();
        mem::try_reserve_exact(&mut data, total)?;

        data.push(b'"');
        for &byte in src {
            if byte <= 0x1F {
                data.extend_from_slice(b"\\u00");
                data.push(HEX_UPPER[usize::from(byte >> 4)]);
                data.push(HEX_UPPER[usize::from(byte & 0x0F)]);
            } else if needs_short_escape(byte) {
                data.push(b'\\');
                data.push(byte);
            } else {
                data.push(byte);
            }
        }
        data.push(b'"');
        data.push(0);

        Self::take_ownership(data)
    }
}
