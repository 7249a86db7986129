//! 溢出检查的尺寸算术与可失败内存预留。
//!
//! # 模块定位（Why）
//! - 上层所有分配都遵循“先算总尺寸、再检查溢出、最后一次性预留”的纪律，
//!   将柔性数组式的 `base + nmemb * elem` 计算集中在一处，避免各调用点
//!   散落各自的 `checked_*` 组合。
//! - 分配失败是契约的一部分而非 panic：`Vec::try_reserve_exact`
//!   的失败被映射为稳定错误码，调用方据此放弃操作并保留原状态。
//!
//! # 使用契约（What）
//! - [`flex_size`] 仅做算术，不接触分配器；溢出返回 [`codes::MEMORY_OVERFLOW`]。
//! - [`try_reserve_exact`] 保证成功后 `vec` 至少还能追加 `additional` 个元素
//!   而不再触发分配；失败返回 [`codes::MEMORY_ALLOCATION`]，且不修改 `vec`。

use alloc::format;
use alloc::vec::Vec;

use crate::error::{CoreError, codes};
use crate::Result;

/// 计算 `base + nmemb * elem` 的总字节数，任一中间结果溢出即失败。
///
/// # 契约说明（What）
/// - **输入**：`base` 为固定头部（例如字符串终止符），`nmemb`/`elem`
///   为成员数量与单成员尺寸；
/// - **返回**：溢出时为 [`codes::MEMORY_OVERFLOW`] 错误，否则为精确总尺寸；
/// - **后置条件**：不发生任何分配，可在热路径上随意调用。
pub fn flex_size(base: usize, nmemb: usize, elem: usize) -> Result<usize> {
    let body = nmemb.checked_mul(elem).ok_or_else(|| {
        CoreError::new(
            codes::MEMORY_OVERFLOW,
            format!("flex_size: nmemb={nmemb} * elem={elem} 超出 usize 上限"),
        )
    })?;
    base.checked_add(body).ok_or_else(|| {
        CoreError::new(
            codes::MEMORY_OVERFLOW,
            format!("flex_size: base={base} + body={body} 超出 usize 上限"),
        )
    })
}

/// 为 `vec` 精确预留 `additional` 个元素的追加空间。
///
/// 失败时 `vec` 保持原状，错误附带分配器报告的根因；
/// 成功后随后的 `extend`/`push`（不超过预留量）不会再分配。
pub fn try_reserve_exact<T>(vec: &mut Vec<T>, additional: usize) -> Result<()> {
    vec.try_reserve_exact(additional).map_err(|err| {
        CoreError::new(
            codes::MEMORY_ALLOCATION,
            format!("try_reserve_exact: 预留 {additional} 个元素失败"),
        )
        .with_cause(err)
    })
}
