//! 稳定错误域定义。
//!
//! # 模块定位（Why）
//! - 文本缓冲与编解码层的失败必须向调用方暴露稳定、机读的分类，
//!   以便测试精确断言、上层按码值决定重试或放弃。
//! - 诊断信息直接附着在错误对象上（码值 + 上下文消息 + 可选根因），
//!   库层不调用任何日志设施，保持 `no_std` 轨道干净。
//!
//! # 使用契约（What）
//! - 错误码一律取自 [`codes`] 模块；自定义码值需遵循 `<域>.<语义>` 命名。
//! - 所有错误满足 `Send + Sync + 'static`，可安全跨线程传播。

use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

/// 底层根因的对象安全别名。
pub type ErrorCause = Box<dyn core::error::Error + Send + Sync + 'static>;

/// `CoreError` 是 `strand` 工作区所有可观察错误的最终形态。
///
/// # 设计背景（Why）
/// - 构造、追加、编解码等不同层次的失败需要合流为统一的错误码，
///   让调用方无需匹配具体枚举即可执行精确分类。
/// - 工作区兼容 `no_std + alloc`，因此基于 `core::error::Error`
///   而非 `std` 专属设施。
///
/// # 契约说明（What）
/// - `code`：`'static` 字符串，承载稳定语义，见 [`codes`]；
/// - `message`：面向排障人员的自然语言描述，不应包含敏感信息；
/// - `cause`：可选底层原因，经由 [`with_cause`](Self::with_cause) 附加后
///   通过 `source()` 暴露完整链路。
///
/// # 设计取舍（Trade-offs）
/// - 消息采用 `Cow<'static, str>`：静态文案零分配，动态上下文按需堆分配。
#[derive(Debug)]
pub struct CoreError {
    code: &'static str,
    message: Cow<'static, str>,
    cause: Option<ErrorCause>,
}

impl CoreError {
    /// 构造核心错误。
    ///
    /// # 契约定义（What）
    /// - `code`：遵循 `<域>.<语义>` 约定的稳定错误码；
    /// - `message`：可为 `&'static str` 或堆分配字符串；
    /// - 返回值拥有独立所有权，初始不含底层原因。
    pub fn new(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// 附带底层原因并返回新的核心错误。
    pub fn with_cause(
        mut self,
        cause: impl core::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// 获取稳定错误码。
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// 获取描述。
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 获取底层原因。
    pub fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl core::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

/// 稳定错误码集合。
///
/// # 命名共识（Consistency）
/// - 统一采用 `<域>.<语义>` 小写蛇形命名；
/// - 码值一经发布不得变更含义，新增语义应新增码值而非复用旧值。
pub mod codes {
    /// 必填参数缺失或取值越过源数据的实际边界。
    pub const APP_INVALID_ARGUMENT: &str = "app.invalid_argument";

    /// Base64 文本长度不是 4 的倍数。
    pub const CODEC_INVALID_LENGTH: &str = "codec.base64.invalid_length";

    /// Base64 文本在合法前缀之后出现无法解释的字节。
    pub const CODEC_INVALID_CHARACTER: &str = "codec.base64.invalid_character";

    /// 内存预留失败（分配器拒绝请求）。
    pub const MEMORY_ALLOCATION: &str = "memory.allocation_failed";

    /// 尺寸算术在分配前即检测到溢出。
    pub const MEMORY_OVERFLOW: &str = "memory.size_overflow";

    /// JSON 转义遇到 7-bit ASCII 之外的字节。
    pub const TEXT_NON_ASCII: &str = "text.non_ascii";

    /// 两遍格式化的测量或渲染阶段报告失败。
    pub const TEXT_FORMAT: &str = "text.format_failed";
}
