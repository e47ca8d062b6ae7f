// 主机记录持久化服务

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{APP_DIR_NAME, HOSTS_FILE_NAME};
use crate::error::AppError;
use crate::models::HostEntry;

/// 主机记录存储
///
/// 数据目录通过构造函数显式传入，默认为用户主目录下的固定目录，
/// 测试可以指向临时目录。每次保存都按名称排序后整体覆盖写入。
pub struct HostStore {
    data_dir: PathBuf,
    data_file: PathBuf,
}

impl HostStore {
    /// 打开指定数据目录下的存储，目录（含父目录）不存在时创建
    ///
    /// 可重复调用，目录已存在时直接复用。
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<HostStore, AppError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::StorageInit(format!("无法创建数据目录 {}: {}", data_dir.display(), e))
        })?;
        let data_file = data_dir.join(HOSTS_FILE_NAME);
        debug!("主机记录文件: {}", data_file.display());
        Ok(HostStore {
            data_dir,
            data_file,
        })
    }

    /// 在用户主目录下打开默认存储
    pub fn open_default() -> Result<HostStore, AppError> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::StorageInit("无法获取用户主目录".to_string()))?;
        HostStore::open(home.join(APP_DIR_NAME))
    }

    /// 数据目录路径
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// 记录文件路径
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// 加载全部主机记录
    ///
    /// 文件不存在时返回空列表（还没有任何记录不是错误）。
    /// 文件存在但无法按模式解析时整体失败，不做部分恢复。
    pub fn load(&self) -> Result<Vec<HostEntry>, AppError> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(AppError::StorageRead)?;
        let entries: Vec<HostEntry> =
            serde_json::from_str(&content).map_err(AppError::CorruptStore)?;
        debug!("已加载 {} 条主机记录", entries.len());
        Ok(entries)
    }

    /// 保存全部主机记录
    ///
    /// 按名称（忽略大小写）排序后整体覆盖写入。先写同目录临时文件再
    /// 原子替换，写入中途崩溃不会留下损坏的记录文件。
    pub fn save(&self, entries: &[HostEntry]) -> Result<(), AppError> {
        let mut ordered: Vec<&HostEntry> = entries.iter().collect();
        ordered.sort_by_key(|e| e.name.to_lowercase());

        let content = serde_json::to_string_pretty(&ordered)
            .map_err(|e| AppError::StorageWrite(e.into()))?;

        let tmp_file = self.data_dir.join(format!("{}.tmp", HOSTS_FILE_NAME));
        fs::write(&tmp_file, content).map_err(AppError::StorageWrite)?;
        fs::rename(&tmp_file, &self.data_file).map_err(AppError::StorageWrite)?;
        debug!("已保存 {} 条主机记录", entries.len());
        Ok(())
    }
}
