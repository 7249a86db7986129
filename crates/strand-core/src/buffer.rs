//! 定长字节缓冲类型。
//!
//! # 模块定位（Why）
//! - 编解码层需要一个“一次建成、尺寸固定”的原始字节载体：
//!   解码器先按权威尺寸预建，再逐组写入；编码器只读取其内容视图。
//! - 以值类型 + 移动语义表达独占所有权，释放由 `Drop` 承担，
//!   不存在句柄层面的双重释放问题。
//!
//! # 设计概要（How）
//! - 底层为 `Vec<u8>`，预建时零值填充，避免向调用方暴露未初始化内存；
//! - [`ByteBuffer::freeze`] 将所有权零拷贝移交给 [`bytes::Bytes`]，
//!   供需要共享只读视图的调用方使用。

use alloc::vec::Vec;

use bytes::Bytes;

use crate::error::{CoreError, codes};
use crate::{Result, mem};

/// 拥有一段定长原始字节的缓冲。
///
/// # 契约说明（What）
/// - **生命周期**：`new` 产生空缓冲；[`pre_build`](Self::pre_build) 将空缓冲
///   一次性建成 `size` 字节；建成后尺寸不再变化。
/// - **访问**：[`content`](Self::content) / [`content_mut`](Self::content_mut)
///   暴露全部字节；[`size`](Self::size) 恒等于建成尺寸。
/// - **失败语义**：重复预建、零尺寸预建返回
///   [`codes::APP_INVALID_ARGUMENT`]；预留失败返回
///   [`codes::MEMORY_ALLOCATION`]，且缓冲保持原状。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// 创建空缓冲，尚未持有任何字节。
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// 将空缓冲一次性建成 `size` 个零值字节。
    ///
    /// # 契约定义（What）
    /// - **前置条件**：缓冲仍为空且 `size > 0`；
    /// - **后置条件**：成功后 `size()` 恒等于 `size`，全部字节为 `0`，
    ///   可经 [`content_mut`](Self::content_mut) 就地写入；
    /// - **失败语义**：违反前置条件或预留失败时缓冲保持空状态。
    pub fn pre_build(&mut self, size: usize) -> Result<()> {
        if !self.data.is_empty() {
            return Err(CoreError::new(
                codes::APP_INVALID_ARGUMENT,
                "pre_build: 缓冲已建成，不可重复预建",
            ));
        }
        if size == 0 {
            return Err(CoreError::new(
                codes::APP_INVALID_ARGUMENT,
                "pre_build: 尺寸不可为 0",
            ));
        }
        mem::try_reserve_exact(&mut self.data, size)?;
        self.data.resize(size, 0);
        Ok(())
    }

    /// 从切片复制建成缓冲。
    pub fn from_slice(source: &[u8]) -> Result<Self> {
        let mut data = Vec::new();
        mem::try_reserve_exact(&mut data, source.len())?;
        data.extend_from_slice(source);
        Ok(Self { data })
    }

    /// 当前内容的只读视图。
    pub fn content(&self) -> &[u8] {
        &self.data
    }

    /// 当前内容的可写视图，供解码器就地填充。
    pub fn content_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// 建成尺寸（空缓冲为 0）。
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 是否尚未持有任何字节。
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 消耗所有权，零拷贝冻结为共享只读视图。
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}
