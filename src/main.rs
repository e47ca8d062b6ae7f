// Shellmark - SSH 服务器书签
// 应用入口

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod constants;
mod error;
mod menu;
mod models;
mod services;
mod ssh;

use cli::{Cli, Command};
use error::AppError;
use models::HostEntry;
use services::{registry, HostStore};

fn init_tracing() {
    // 可以通过 RUST_LOG 环境变量控制日志级别，例如：RUST_LOG=debug shellmark list
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("错误: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let store = HostStore::open_default()?;

    match cli.command {
        Some(command) => run_command(command, &store),
        None => {
            menu::run(&store)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// 一次性命令模式：执行单条命令后立即退出
///
/// 校验失败、名称冲突、未找到记录时打印一行提示并返回非零退出码；
/// 存储层错误向上传播，由 main 统一处理。
fn run_command(command: Command, store: &HostStore) -> anyhow::Result<ExitCode> {
    let mut entries = store.load()?;

    match command {
        Command::List => {
            menu::print_hosts(&entries);
            Ok(ExitCode::SUCCESS)
        }
        Command::Add(args) => {
            let name = args.name.clone();
            let candidate = HostEntry {
                name: args.name,
                host: args.host,
                user: args.user,
                port: args.port,
                key_file: args.key_file,
                note: args.note,
            };
            match registry::add_host(&mut entries, candidate) {
                Ok(()) => {
                    store.save(&entries)?;
                    println!("已添加: {}", name);
                    Ok(ExitCode::SUCCESS)
                }
                Err(AppError::DuplicateName(name)) => {
                    eprintln!("名称 '{}' 已存在。", name);
                    Ok(ExitCode::FAILURE)
                }
                Err(AppError::Validation(msg)) => {
                    eprintln!("{}。", msg);
                    Ok(ExitCode::FAILURE)
                }
                Err(e) => Err(e.into()),
            }
        }
        Command::Remove(args) => match registry::remove_host(&mut entries, &args.name) {
            Ok(removed) => {
                store.save(&entries)?;
                println!("已删除: {}", removed.name);
                Ok(ExitCode::SUCCESS)
            }
            Err(AppError::NotFound(name)) => {
                eprintln!("未找到服务器: {}", name);
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        },
        Command::Connect(args) => match registry::find_host(&entries, &args.name) {
            Some(entry) => match ssh::connect(entry) {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(AppError::ClientNotFound) => {
                    eprintln!("错误：未找到 ssh 命令。请确认已安装 OpenSSH Client。");
                    Ok(ExitCode::FAILURE)
                }
                Err(e) => Err(e.into()),
            },
            // 与交互模式保持一致：未找到记录返回非零退出码
            None => {
                eprintln!("未找到服务器: {}", args.name);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
