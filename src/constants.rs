// 应用常量

/// 用户主目录下的数据目录名
pub const APP_DIR_NAME: &str = ".shellmark";

/// 主机记录文件名
pub const HOSTS_FILE_NAME: &str = "hosts.json";

/// 外部 SSH 客户端程序名
pub const SSH_PROGRAM: &str = "ssh";
