// 命令行参数定义

use clap::{Args, Parser, Subcommand};

/// 在终端里记录和打开 SSH 服务器（不保存密码）
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 不带子命令时进入交互式菜单
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 列出所有服务器
    List,
    /// 添加服务器
    Add(AddArgs),
    /// 删除服务器
    Remove(RemoveArgs),
    /// 连接服务器
    Connect(ConnectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// 显示名称（唯一）
    pub name: String,

    /// 主机名或 IP
    pub host: String,

    /// 用户名
    #[arg(long)]
    pub user: Option<String>,

    /// 端口，默认 22
    #[arg(long, default_value_t = 22)]
    pub port: u16,

    /// 私钥文件路径
    #[arg(long)]
    pub key_file: Option<String>,

    /// 备注
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// 显示名称
    pub name: String,
}

#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    /// 显示名称
    pub name: String,
}
