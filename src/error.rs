use thiserror::Error;

/// 库层错误类型。CLI 层统一包装为 `anyhow::Error`。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScreenError {
    /// 参考序列或基因序列中出现 A/C/G/T 以外的字符
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// 参考序列过长，状态下标无法用 u32 表示
    #[error("reference of {len} bases exceeds the supported maximum of {max}")]
    ReferenceTooLong { len: usize, max: usize },

    /// 严格模式下出现长度为 0 的基因
    #[error("collection '{collection}' has an empty gene at index {index}")]
    EmptyQuery { collection: String, index: usize },

    /// 严格模式下出现不含任何基因的疾病
    #[error("collection '{collection}' has no genes")]
    EmptyCollection { collection: String },

    /// 输入文件格式错误（token 从 1 开始计数）
    #[error("parse error at token {token}: {message}")]
    Parse { token: usize, message: String },

    #[error("cannot build thread pool: {0}")]
    ThreadPool(String),
}
