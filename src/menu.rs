// 交互式菜单
// 纯文本逐行交互；操作错误在这里转成一行提示，菜单本身不会退出进程

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::error::AppError;
use crate::models::HostEntry;
use crate::services::{registry, HostStore};
use crate::ssh;

/// 打印主机记录列表（按名称排序，忽略大小写）
pub fn print_hosts(entries: &[HostEntry]) {
    if entries.is_empty() {
        println!("\n当前没有已保存的服务器。\n");
        return;
    }

    let mut ordered: Vec<&HostEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.name.to_lowercase());

    println!("\n已保存服务器：");
    for (idx, entry) in ordered.iter().enumerate() {
        let mut details = vec![
            format!("目标={}", entry.target()),
            format!("端口={}", entry.port),
        ];
        if let Some(key_file) = &entry.key_file {
            details.push(format!("密钥={}", key_file));
        }
        if let Some(note) = &entry.note {
            details.push(format!("备注={}", note));
        }
        println!("  {}. {:<15} {}", idx + 1, entry.name, details.join(" | "));
    }
    println!();
}

/// 读取一行输入，空输入时落回默认值；EOF 返回 None
fn prompt(text: &str, default: Option<&str>) -> Result<Option<String>> {
    match default {
        Some(d) => print!("{} [{}]: ", text, d),
        None => print!("{}: ", text),
    }
    io::stdout().flush().context("无法刷新标准输出")?;

    let mut line = String::new();
    let n = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("无法读取输入")?;
    if n == 0 {
        return Ok(None);
    }

    let value = line.trim().to_string();
    if value.is_empty() {
        if let Some(d) = default {
            return Ok(Some(d.to_string()));
        }
    }
    Ok(Some(value))
}

/// 交互式菜单主循环，选择退出（或输入结束）时返回
pub fn run(store: &HostStore) -> Result<()> {
    loop {
        println!("{}", "=".repeat(45));
        println!("Shellmark SSH 服务器书签");
        println!("1) 查看服务器");
        println!("2) 添加服务器");
        println!("3) 删除服务器");
        println!("4) 连接服务器");
        println!("5) 退出");
        println!("{}", "=".repeat(45));

        let choice = match prompt("请选择操作 [1-5]", None)? {
            Some(choice) => choice,
            None => {
                println!("再见。");
                return Ok(());
            }
        };

        let result = match choice.as_str() {
            "1" => view_hosts(store),
            "2" => add_host_flow(store),
            "3" => remove_host_flow(store),
            "4" => connect_flow(store),
            "5" => {
                println!("再见。");
                return Ok(());
            }
            _ => {
                println!("无效输入，请输入 1-5。");
                continue;
            }
        };

        if let Err(e) = result {
            println!("错误: {:#}", e);
        }
    }
}

fn view_hosts(store: &HostStore) -> Result<()> {
    let entries = store.load()?;
    print_hosts(&entries);
    Ok(())
}

fn add_host_flow(store: &HostStore) -> Result<()> {
    let mut entries = store.load()?;
    println!("\n== 添加服务器 ==");

    let name = prompt("显示名称(唯一)", None)?.unwrap_or_default();
    if name.is_empty() {
        println!("名称不能为空。");
        return Ok(());
    }
    if registry::find_host(&entries, &name).is_some() {
        println!("名称 '{}' 已存在。", name);
        return Ok(());
    }

    let host = prompt("主机/IP", None)?.unwrap_or_default();
    if host.is_empty() {
        println!("主机不能为空。");
        return Ok(());
    }

    let user = prompt("用户名(可空)", None)?.filter(|s| !s.is_empty());

    let port_raw = prompt("端口", Some("22"))?.unwrap_or_else(|| "22".to_string());
    let port: u16 = match port_raw.parse() {
        Ok(port) if port > 0 => port,
        _ => {
            println!("端口必须是 1-65535 之间的数字。");
            return Ok(());
        }
    };

    let key_file = prompt("私钥路径(可空, 例如 ~/.ssh/id_rsa)", None)?.filter(|s| !s.is_empty());
    let note = prompt("备注(可空)", None)?.filter(|s| !s.is_empty());

    let candidate = HostEntry {
        name: name.clone(),
        host,
        user,
        port,
        key_file,
        note,
    };
    registry::add_host(&mut entries, candidate)?;
    store.save(&entries)?;
    println!("已保存服务器: {}", name);
    Ok(())
}

fn remove_host_flow(store: &HostStore) -> Result<()> {
    let mut entries = store.load()?;
    print_hosts(&entries);
    if entries.is_empty() {
        return Ok(());
    }

    let name = prompt("输入要删除的显示名称", None)?.unwrap_or_default();
    match registry::remove_host(&mut entries, &name) {
        Ok(removed) => {
            store.save(&entries)?;
            println!("已删除: {}", removed.name);
        }
        Err(AppError::NotFound(_)) => println!("未找到服务器: {}", name),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn connect_flow(store: &HostStore) -> Result<()> {
    let entries = store.load()?;
    if entries.is_empty() {
        println!("没有可连接的服务器，请先添加。");
        return Ok(());
    }
    print_hosts(&entries);

    let name = prompt("输入要连接的显示名称", None)?.unwrap_or_default();
    match registry::find_host(&entries, &name) {
        Some(entry) => match ssh::connect(entry) {
            Ok(()) => {}
            Err(AppError::ClientNotFound) => {
                println!("错误：未找到 ssh 命令。请确认已安装 OpenSSH Client。");
            }
            Err(e) => return Err(e.into()),
        },
        None => println!("未找到服务器: {}", name),
    }
    Ok(())
}
