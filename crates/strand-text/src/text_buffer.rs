//! 动态文本缓冲的核心实现。

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use strand_core::error::{CoreError, codes};
use strand_core::{Result, mem};

use crate::format;

/// 截取 `bytes` 中首个 `0` 字节之前的前缀。
///
/// 所有按文本语义读取的输入都经过本函数：逻辑内容止于首个终止符，
/// 之后的字节不参与任何操作。
pub(crate) fn c_content(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&byte| byte == 0) {
        Some(terminator) => &bytes[..terminator],
        None => bytes,
    }
}

/// 独占所有权、以单个 `0` 字节收尾的动态文本缓冲。
///
/// # 设计背景（Why）
/// - 编码器产出、调用方拼装的文本需要一个“逻辑长度 = 首个终止符位置”的
///   统一载体；该边界语义允许逐字节构造的内容内嵌 `0` 字节，
///   同时保证所有查询只暴露终止符之前的前缀。
/// - 以值类型表达独占所有权：构造产生、移动传递、`Drop` 释放，
///   不存在句柄层面的悬垂或双重释放。
///
/// # 契约说明（What）
/// - **存储不变量**：底层 `Vec<u8>` 恒非空，且末位字节为 `0`；
/// - **逻辑长度**：[`len`](Self::len) 返回首个 `0` 字节的下标；
/// - **事务性**：每个变更操作要么完整生效，要么失败并保持先前内容原样，
///   唯一例外是 [`append_format`](Self::append_format) 第二遍渲染失败时
///   截断回操作前长度（见该方法文档）。
///
/// # 风险提示（Trade-offs）
/// - 逻辑长度按需扫描而非缓存，换取不变量维护的简单性；
///   调用方在热循环中应自行缓存 `len()` 的结果。
pub struct TextBuffer {
    data: Vec<u8>,
}

impl TextBuffer {
    /// 创建空缓冲，仅含终止符。
    pub fn new() -> Self {
        Self { data: vec![0] }
    }

    /// 复制 `src` 并追加终止符；所有复制型构造的共用路径。
    fn copied(src: &[u8]) -> Result<Self> {
        let total = mem::flex_size(1, src.len(), 1)?;
        let mut data = Vec::new();
        mem::try_reserve_exact(&mut data, total)?;
        data.extend_from_slice(src);
        data.push(0);
        Ok(Self { data })
    }

    /// 复制整段文本构造缓冲。
    ///
    /// 输入按文本语义读取：内容止于首个 `0` 字节（如有）。
    pub fn from_text(text: &str) -> Result<Self> {
        Self::copied(c_content(text.as_bytes()))
    }

    /// 复制文本的前 `n` 个字节构造缓冲。
    ///
    /// `n` 超过源文本逻辑长度时返回 [`codes::APP_INVALID_ARGUMENT`]，
    /// 不产生任何缓冲。
    pub fn from_prefix(text: &str, n: usize) -> Result<Self> {
        let src = c_content(text.as_bytes());
        if n > src.len() {
            return Err(CoreError::new(
                codes::APP_INVALID_ARGUMENT,
                alloc::format!(
                    "from_prefix: n={n} 超过源文本长度 {}",
                    src.len()
                ),
            ));
        }
        Self::copied(&src[..n])
    }

    /// 逐字节复制 `source` 构造缓冲，随后追加一个终止符。
    ///
    /// 源内容可以内嵌 `0` 字节；此时逻辑长度将止于首个内嵌终止符，
    /// 其余字节仍保留在存储中，经 [`as_bytes_with_nul`](Self::as_bytes_with_nul)
    /// 可见。
    pub fn from_bytes(source: &[u8]) -> Result<Self> {
        Self::copied(source)
    }

    /// 两遍格式化构造：先测量精确长度、一次性分配、再渲染。
    ///
    /// # 契约定义（What）
    /// - 渲染结果为零长度时返回空缓冲；
    /// - 测量或渲染阶段报告失败时返回 [`codes::TEXT_FORMAT`]，
    ///   不产生任何缓冲。
    pub fn from_format(args: fmt::Arguments<'_>) -> Result<Self> {
        let measured = format::measure(args)?;
        if measured == 0 {
            return Ok(Self::new());
        }
        let total = mem::flex_size(1, measured, 1)?;
        let mut data = Vec::new();
        mem::try_reserve_exact(&mut data, total)?;
        format::render_into(&mut data, measured, args)?;
        data.push(0);
        Ok(Self { data })
    }

    /// 接管一段已分配、已终止的内存，不做复制。
    ///
    /// `raw` 的所有权完整转移给新缓冲；若 `raw` 为空或末位不是 `0`，
    /// 返回 [`codes::APP_INVALID_ARGUMENT`]（此时 `raw` 随错误丢弃）。
    pub fn take_ownership(raw: Vec<u8>) -> Result<Self> {
        match raw.last() {
            Some(0) => Ok(Self { data: raw }),
            _ => Err(CoreError::new(
                codes::APP_INVALID_ARGUMENT,
                "take_ownership: 内存必须非空且以终止符结尾",
            )),
        }
    }

    /// 深拷贝当前逻辑内容。
    ///
    /// 只复制首个终止符之前的前缀；内嵌终止符之后的字节不随拷贝传播。
    pub fn try_clone(&self) -> Result<Self> {
        Self::copied(self.as_bytes())
    }

    /// 复制 `source` 并在两侧加上字面引号 `"` 构造缓冲。
    pub fn new_quoted(source: &str) -> Result<Self> {
        let src = c_content(source.as_bytes());
        let total = mem::flex_size(3, src.len(), 1)?;
        let mut data = Vec::new();
        mem::try_reserve_exact(&mut data, total)?;
        data.push(b'"');
        data.extend_from_slice(src);
        data.push(b'"');
        data.push(0);
        Ok(Self { data })
    }

    /// 逻辑长度：首个终止符的下标。
    pub fn len(&self) -> usize {
        self.data
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(self.data.len())
    }

    /// 逻辑内容是否为空。
    pub fn is_empty(&self) -> bool {
        self.data.first() == Some(&0)
    }

    /// 逻辑内容视图：首个终止符之前的字节。
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// 原始存储视图：全部字节，含终止符与可能的内嵌内容。
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data
    }

    /// 逻辑内容的 UTF-8 视图；内容不是合法 UTF-8 时为 `None`。
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// 追加与提交的共用路径：预留成功后才截断、复制、补终止符。
    fn append_bytes(&mut self, src: &[u8]) -> Result<()> {
        let head = self.len();
        let total = mem::flex_size(head, src.len() + 1, 1)?;
        let additional = total.saturating_sub(self.data.len());
        mem::try_reserve_exact(&mut self.data, additional)?;
        self.data.truncate(head);
        self.data.extend_from_slice(src);
        self.data.push(0);
        Ok(())
    }

    /// 追加一段文本。
    ///
    /// 预留失败时整个操作放弃，先前内容保持原样；不存在部分追加。
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.append_bytes(c_content(text.as_bytes()))
    }

    /// 追加另一个缓冲的逻辑内容。
    pub fn append_buffer(&mut self, other: &TextBuffer) -> Result<()> {
        self.append_bytes(other.as_bytes())
    }

    /// 以 `source` 的逻辑内容整体替换当前内容（精确重分配）。
    ///
    /// 若 `source` 与当前内容指向同一块内存，按别名契约直接返回成功；
    /// 指向部分重叠但不相等的内存属于未定义行为，不做检测。
    pub fn replace_with(&mut self, source: &str) -> Result<()> {
        if core::ptr::eq(self.data.as_ptr(), source.as_ptr()) {
            return Ok(());
        }
        let src = c_content(source.as_bytes());
        let total = mem::flex_size(1, src.len(), 1)?;
        let additional = total.saturating_sub(self.data.len());
        mem::try_reserve_exact(&mut self.data, additional)?;
        self.data.clear();
        self.data.extend_from_slice(src);
        self.data.push(0);
        Ok(())
    }

    /// 以 `source` 的前 `min(n, 逻辑长度)` 个字节替换当前内容。
    pub fn replace_with_prefix(&mut self, source: &str, n: usize) -> Result<()> {
        let src = c_content(source.as_bytes());
        let take = src.len().min(n);
        let total = mem::flex_size(1, take, 1)?;
        let additional = total.saturating_sub(self.data.len());
        mem::try_reserve_exact(&mut self.data, additional)?;
        self.data.clear();
        self.data.extend_from_slice(&src[..take]);
        self.data.push(0);
        Ok(())
    }

    /// 两遍格式化追加。
    ///
    /// # 契约定义（What）
    /// - 渲染结果为零长度时为空操作，直接成功；
    /// - 第一遍测量失败返回 [`codes::TEXT_FORMAT`]，内容不变；
    /// - 第二遍渲染失败（参数自身报错或超出测量预算）时，
    ///   缓冲被截断回操作前的精确长度后返回 [`codes::TEXT_FORMAT`] ——
    ///   这是唯一一处“失败后状态非原样”的操作，保证半成品尾部
    ///   永远不可观察。
    pub fn append_format(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        let measured = format::measure(args)?;
        if measured == 0 {
            return Ok(());
        }
        let head = self.len();
        let total = mem::flex_size(head, measured + 1, 1)?;
        let additional = total.saturating_sub(self.data.len());
        mem::try_reserve_exact(&mut self.data, additional)?;
        self.data.truncate(head);
        match format::render_into(&mut self.data, measured, args) {
            Ok(()) => {
                self.data.push(0);
                Ok(())
            }
            Err(err) => {
                // 渲染中途失败：回滚到操作前长度，不暴露半写入的尾部。
                self.data.truncate(head);
                self.data.push(0);
                Err(err)
            }
        }
    }

    /// 就地在两侧加上字面引号 `"`。
    ///
    /// 预留失败时内容保持原样。
    pub fn quote(&mut self) -> Result<()> {
        let head = self.len();
        let total = mem::flex_size(3, head, 1)?;
        let additional = total.saturating_sub(self.data.len());
        mem::try_reserve_exact(&mut self.data, additional)?;
        self.data.truncate(head);
        self.data.insert(0, b'"');
        self.data.push(b'"');
        self.data.push(0);
        Ok(())
    }

    /// 重置为空缓冲并释放多余容量。
    pub fn clear(&mut self) {
        self.data.clear();
        self.data.push(0);
        self.data.shrink_to_fit();
    }

    /// 在逻辑内容范围内把所有 `target` 字节替换为 `replacement`。
    ///
    /// 两值相等时为空操作。替换范围按进入时的逻辑长度一次性确定，
    /// 因此以 `0` 为替换值会缩短之后观察到的逻辑长度。
    pub fn replace_byte(&mut self, target: u8, replacement: u8) {
        if target == replacement {
            return;
        }
        let head = self.len();
        for byte in &mut self.data[..head] {
            if *byte == target {
                *byte = replacement;
            }
        }
    }

    /// 句柄层面的三方比较，保留空句柄的非对称排序：
    /// 双空相等，空句柄排在任何非空句柄之后。
    ///
    /// 非空句柄之间按逻辑内容做字节字典序比较。
    pub fn compare(lhs: Option<&Self>, rhs: Option<&Self>) -> Ordering {
        match (lhs, rhs) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TextBuffer {}

impl PartialOrd for TextBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBuffer")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
