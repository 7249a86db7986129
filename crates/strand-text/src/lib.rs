#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # strand-text
//!
//! ## 模块定位（Why）
//! - 提供 [`TextBuffer`]：一段独占所有权、以单个 `0` 字节收尾的堆上文本，
//!   是编码器输出与一般文本拼装场景的统一载体。
//! - 原生字符串类型无法表达“逻辑长度止于首个终止符”的边界语义，
//!   而该语义正是上游字节流与本缓冲互转时的关键契约。
//!
//! ## 交互契约（What）
//! - 构造族：空、复制文本、复制前缀、逐字节复制、两遍格式化、
//!   接管已终止内存、深拷贝、引号包裹、JSON 转义。
//! - 变更族：追加、整体替换、前缀替换、格式化追加、就地引号、
//!   清空、字节替换；除文档标注的格式化追加回滚外，
//!   任何失败都保持先前内容原样可用。
//! - 查询族：逻辑长度、内容视图、含终止符的原始视图、三方比较
//!   （含空句柄的非对称排序）。
//!
//! ## 实现策略（How）
//! - 所有扩容先经 `strand-core` 的尺寸算术检查溢出，再以
//!   `try_reserve_exact` 精确预留，“预留成功后才动内容”，
//!   从而把事务性失败语义落在类型内部而非调用方约定上。

extern crate alloc;

mod format;
mod json;
mod text_buffer;

pub use strand_core::{CoreError, Result, codes};
pub use text_buffer::TextBuffer;

/// 以 `format!` 语法构造 [`TextBuffer`]，等价于
/// `TextBuffer::from_format(format_args!(...))`。
///
/// 渲染遵循两遍纪律：先测量精确长度，再一次性分配并渲染。
#[macro_export]
macro_rules! text_format {
    ($($arg:tt)*) => {
        $crate::TextBuffer::from_format(::core::format_args!($($arg)*))
    };
}

/// 以 `format!` 语法向既有 [`TextBuffer`] 追加内容，等价于
/// `buffer.append_format(format_args!(...))`。
#[macro_export]
macro_rules! text_append_format {
    ($buffer:expr, $($arg:tt)*) => {
        ($buffer).append_format(::core::format_args!($($arg)*))
    };
}
