// 主机记录数据结构

use serde::{Deserialize, Serialize};

/// 单个 SSH 主机记录（持久化用）
///
/// `name` 在整个集合内唯一：查找按原样精确匹配，排序时忽略大小写。
/// 记录一旦创建不再原地修改，替换 = 删除 + 重新添加。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostEntry {
    /// 显示名称（唯一）
    pub name: String,
    /// 主机名或 IP
    pub host: String,
    /// 登录用户名
    pub user: Option<String>,
    /// SSH 端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 私钥文件路径
    pub key_file: Option<String>,
    /// 备注
    pub note: Option<String>,
}

fn default_port() -> u16 {
    22
}

impl HostEntry {
    /// 连接目标：有用户名时为 `user@host`，否则为裸 `host`
    pub fn target(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }
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
    fn test_target_with_user() {
        let mut e = entry("srv1", "10.0.0.5");
        e.user = Some("ops".to_string());
        assert_eq!(e.target(), "ops@10.0.0.5");
    }

    #[test]
    fn test_target_without_user() {
        assert_eq!(entry("srv1", "10.0.0.5").target(), "10.0.0.5");
    }

    #[test]
    fn test_deserialize_defaults_port() {
        let e: HostEntry = serde_json::from_str(r#"{"name":"a","host":"h"}"#).unwrap();
        assert_eq!(e.port, 22);
        assert_eq!(e.user, None);
        assert_eq!(e.key_file, None);
        assert_eq!(e.note, None);
    }

    #[test]
    fn test_deserialize_rejects_missing_host() {
        let result = serde_json::from_str::<HostEntry>(r#"{"name":"a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let result =
            serde_json::from_str::<HostEntry>(r#"{"name":"a","host":"h","password":"x"}"#);
        assert!(result.is_err());
    }
}
