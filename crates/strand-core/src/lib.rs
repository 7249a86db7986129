#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # strand-core
//!
//! ## 模块定位（Why）
//! - **定位**：`strand` 工作区的最底层 crate，承载三类被所有上层复用的契约：
//!   稳定错误域（[`CoreError`] + [`codes`]）、溢出检查的尺寸算术（[`mem`]）
//!   与定长字节缓冲类型（[`ByteBuffer`]）。
//! - **架构角色**：文本缓冲（`strand-text`）与 Base64 编解码（`strand-codec-base64`）
//!   均不直接调用分配器，而是经由本 crate 的 `mem` 模块获得“先算尺寸、再检查溢出、
//!   最后一次性预留”的统一纪律。
//!
//! ## 交互契约（What）
//! - 所有可失败操作返回 [`Result`]，错误码取自 [`codes`] 模块的稳定常量，
//!   调用方可按 `<域>.<语义>` 前缀做精确分类。
//! - [`ByteBuffer`] 表达“一次建成、尺寸固定”的原始字节序列，是编解码层的
//!   输入/输出载体；冻结为 [`bytes::Bytes`] 后可零拷贝交给传输或缓存层。
//!
//! ## 实现策略（How）
//! - 核心保持 `no_std + alloc` 兼容：错误类型基于 `core::error::Error`，
//!   消息使用 `Cow<'static, str>` 以兼顾静态文案与动态上下文。
//! - 分配失败不触发 panic：统一走 `Vec::try_reserve_exact`，
//!   失败映射为 [`codes::MEMORY_ALLOCATION`]。

extern crate alloc;

pub mod buffer;
pub mod error;
pub mod mem;

pub use buffer::ByteBuffer;
pub use error::{CoreError, ErrorCause, codes};

/// 工作区统一的 `Result` 别名，默认错误类型为 [`CoreError`]。
///
/// 上层 crate 以 `strand_core::Result<T>` 书写返回值，与错误域保持一致；
/// 需要自定义错误类型时仍可显式传入第二个类型参数。
pub type Result<T, E = CoreError> = core::result::Result<T, E>;
