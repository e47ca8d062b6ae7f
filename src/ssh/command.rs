// SSH 命令行构建

use crate::constants::SSH_PROGRAM;
use crate::models::HostEntry;

/// 从主机记录构建外部 ssh 客户端的参数列表
///
/// 固定顺序：程序名、连接目标、`-p 端口`，配置了私钥时追加 `-i 路径`。
/// 纯函数，不读环境。
pub fn build_ssh_command(entry: &HostEntry) -> Vec<String> {
    let mut cmd = vec![
        SSH_PROGRAM.to_string(),
        entry.target(),
        "-p".to_string(),
        entry.port.to_string(),
    ];
    if let Some(key_file) = &entry.key_file {
        cmd.push("-i".to_string());
        cmd.push(key_file.clone());
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let entry = HostEntry {
            name: "srv1".to_string(),
            host: "10.0.0.5".to_string(),
            user: Some("ops".to_string()),
            port: 2222,
            key_file: Some("/k".to_string()),
            note: None,
        };
        assert_eq!(
            build_ssh_command(&entry),
            vec!["ssh", "ops@10.0.0.5", "-p", "2222", "-i", "/k"]
        );
    }

    #[test]
    fn test_bare_record_uses_defaults() {
        let entry = HostEntry {
            name: "srv1".to_string(),
            host: "10.0.0.5".to_string(),
            user: None,
            port: 22,
            key_file: None,
            note: None,
        };
        assert_eq!(build_ssh_command(&entry), vec!["ssh", "10.0.0.5", "-p", "22"]);
    }
}
