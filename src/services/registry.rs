// 主机记录集合操作
// 纯内存操作，不做任何 IO；读写文件由调用方组合 HostStore 完成

use crate::error::AppError;
use crate::models::HostEntry;

/// 添加主机记录
///
/// 名称和主机不能为空，端口必须在 1-65535 之间，名称不能与现有记录
/// 重复（精确匹配，区分大小写）。失败时集合保持不变。
pub fn add_host(entries: &mut Vec<HostEntry>, candidate: HostEntry) -> Result<(), AppError> {
    if candidate.name.is_empty() {
        return Err(AppError::Validation("名称不能为空".to_string()));
    }
    if candidate.host.is_empty() {
        return Err(AppError::Validation("主机不能为空".to_string()));
    }
    if candidate.port == 0 {
        return Err(AppError::Validation("端口必须在 1-65535 之间".to_string()));
    }
    if entries.iter().any(|e| e.name == candidate.name) {
        return Err(AppError::DuplicateName(candidate.name));
    }
    entries.push(candidate);
    Ok(())
}

/// 删除指定名称的主机记录，返回被删除的记录
///
/// 名称不存在时返回 NotFound，集合保持不变。
pub fn remove_host(entries: &mut Vec<HostEntry>, name: &str) -> Result<HostEntry, AppError> {
    match entries.iter().position(|e| e.name == name) {
        Some(pos) => Ok(entries.remove(pos)),
        None => Err(AppError::NotFound(name.to_string())),
    }
}

/// 查找指定名称的主机记录（精确匹配）
pub fn find_host<'a>(entries: &'a [HostEntry], name: &str) -> Option<&'a HostEntry> {
    entries.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, host: &str) -> HostEntry {
        HostEntry {
            name: name.to_string(),
            host: host.to_string(),
            user: None,
            port: 22,
            key_file: None,
            note: None,
        }
    }

    #[test]
    fn test_add_host_appends() {
        let mut entries = vec![];
        add_host(&mut entries, entry("srv1", "10.0.0.5")).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_add_host_rejects_duplicate_name() {
        let mut entries = vec![entry("srv1", "10.0.0.5")];
        let result = add_host(&mut entries, entry("srv1", "10.0.0.6"));
        assert!(matches!(result, Err(AppError::DuplicateName(n)) if n == "srv1"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].host, "10.0.0.5");
    }

    #[test]
    fn test_add_host_duplicate_check_is_case_sensitive() {
        let mut entries = vec![entry("srv1", "10.0.0.5")];
        add_host(&mut entries, entry("SRV1", "10.0.0.6")).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_add_host_validates_fields() {
        let mut entries = vec![];
        assert!(matches!(
            add_host(&mut entries, entry("", "10.0.0.5")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            add_host(&mut entries, entry("srv1", "")),
            Err(AppError::Validation(_))
        ));
        let mut zero_port = entry("srv1", "10.0.0.5");
        zero_port.port = 0;
        assert!(matches!(
            add_host(&mut entries, zero_port),
            Err(AppError::Validation(_))
        ));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_remove_host_returns_removed_entry() {
        let mut entries = vec![entry("srv1", "10.0.0.5"), entry("srv2", "10.0.0.6")];
        let removed = remove_host(&mut entries, "srv1").unwrap();
        assert_eq!(removed.name, "srv1");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "srv2");
    }

    #[test]
    fn test_remove_host_missing_name_keeps_collection() {
        let mut entries = vec![entry("srv1", "10.0.0.5")];
        let result = remove_host(&mut entries, "srv9");
        assert!(matches!(result, Err(AppError::NotFound(n)) if n == "srv9"));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_find_host_exact_match() {
        let entries = vec![entry("srv1", "10.0.0.5")];
        assert!(find_host(&entries, "srv1").is_some());
        assert!(find_host(&entries, "SRV1").is_none());
        assert!(find_host(&entries, "srv2").is_none());
    }
}
