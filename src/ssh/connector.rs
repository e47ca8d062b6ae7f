// SSH 连接启动器
// 调用系统 ssh 客户端，继承当前终端的标准输入输出，
// 密码、密钥口令、主机密钥确认都由 ssh 自己交互完成

use std::io;
use std::process::Command;

use tracing::info;

use crate::error::AppError;
use crate::models::HostEntry;

use super::command::build_ssh_command;

/// 启动到指定主机的 SSH 会话，阻塞到子进程退出
///
/// 子进程的退出状态只记录日志，不作为失败处理。
pub fn connect(entry: &HostEntry) -> Result<(), AppError> {
    let cmd = build_ssh_command(entry);

    println!("\n正在连接: {} ({})", entry.name, entry.target());
    println!("执行命令: {}", cmd.join(" "));
    println!("提示：不会记录密码，认证由 ssh 自己处理。\n");

    match Command::new(&cmd[0]).args(&cmd[1..]).status() {
        Ok(status) => {
            info!("ssh 已退出: {}", status);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AppError::ClientNotFound),
        Err(e) => Err(AppError::Io(e)),
    }
}
