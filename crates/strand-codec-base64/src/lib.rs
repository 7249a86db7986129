#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # strand-codec-base64
//!
//! ## 模块定位（Why）
//! - **定位**：在 [`ByteBuffer`](strand_core::ByteBuffer) 与
//!   [`TextBuffer`](strand_text::TextBuffer) 之间做规范化 Base64 变换的
//!   纯转换层，自身不持有状态。
//! - **架构角色**：编码路径把任意字节序列渲染为带 `=`/`==` 填充的
//!   规范文本；解码路径按填充推导权威输出尺寸并逐组还原字节。
//!
//! ## 交互契约（What）
//! - [`encode`] / [`encode_slice`]：零长输入产出空文本（不带填充）；
//!   其余输出长度恒为 4 的倍数，分配一次完成，尺寸算术先查溢出。
//! - [`decode`]：长度不是 4 的倍数、合法前缀之后出现无法解释的字节、
//!   或预留失败时各自返回稳定错误码，绝不产出部分缓冲。
//!
//! ## 实现策略（How）
//! - 查表编码：64 项主表之外预置 16 项高半字节子表与 4 项高两位子表，
//!   尾组字符直接落表，不做位层特判。
//! - 解码先统计合法前缀长度，再校验余下部分只能是 `""`/`"="`/`"=="`，
//!   嵌入式非法字节一律硬错误而非静默截断。

extern crate alloc;

mod alphabet;
mod decode;
mod encode;

pub use decode::decode;
pub use encode::{encode, encode_slice};
pub use strand_core::{CoreError, Result, codes};
