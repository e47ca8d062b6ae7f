// 错误类型定义

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入校验失败（空名称、空主机、非法端口）
    #[error("invalid input: {0}")]
    Validation(String),

    /// 名称已存在
    #[error("host '{0}' already exists")]
    DuplicateName(String),

    /// 未找到记录
    #[error("host '{0}' not found")]
    NotFound(String),

    /// 记录文件存在但无法解析
    #[error("corrupt host store: {0}")]
    CorruptStore(serde_json::Error),

    /// 数据目录初始化失败
    #[error("storage init failed: {0}")]
    StorageInit(String),

    /// 记录文件读取失败
    #[error("failed to read host store: {0}")]
    StorageRead(std::io::Error),

    /// 记录文件写入失败
    #[error("failed to write host store: {0}")]
    StorageWrite(std::io::Error),

    /// 未找到外部 ssh 客户端
    #[error("ssh client not found")]
    ClientNotFound,

    /// 其他 IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
