//! 终端初始化和清理

use std::io::{self, Stdout};
use std::sync::Once;
use std::thread;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端
///
/// 同时安装 panic hook，主线程 panic 时先恢复终端再打印信息。
pub fn init_terminal() -> Result<Term> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        // 进入备用屏幕失败时不要把终端留在原始模式
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    tracing::debug!("terminal entered raw mode");
    Ok(terminal)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::debug!("terminal restored");
    Ok(())
}

/// 安装 panic hook（只安装一次）
///
/// 命令 worker 的 panic 由派发器捕获并转成错误屏，
/// 这里只记录日志，不能写 stderr，否则会弄花界面。
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let current = thread::current();
            let name = current.name().unwrap_or("unnamed");
            tracing::error!(thread = name, %info, "panic");
            if name == "main" {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                default_panic(info);
            }
        }));
    });
}
