//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时（main.rs），创建以下对象：
//!
//!     EventQueue          // 事件队列：按键与命令结果共用
//!     Dispatcher          // 命令派发器：在 tokio 运行时上执行命令
//!     InputPump           // 输入线程：读取终端事件并送入队列
//!     App {
//!         should_quit: false,
//!         view: ViewState::ClusterList,           // 启动时显示集群列表
//!         clusters: 配置文件中的集群,
//!         connection: None,
//!         ...
//!     }
//!
//!
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     match queue.next() {                            // 阻塞等待下一个事件（按键或命令结果）
//!         Input(event)    → handle_event(event , &app)    // 翻译成 AppMessage
//!         Delivery(d)     → AppMessage::Delivered(d)      // 命令结果
//!         InputFailed(e)  → 返回错误，程序退出
//!     }
//!     let commands = update::update(&mut app , msg);  // 更新状态，得到命令
//!     dispatcher.issue_all(commands);                 // 派发命令，立即返回
//! }
//!
//! 主循环是 App 唯一的修改者；命令在工作线程上执行，
//! 结果只能通过队列送回，所以渲染永远不会被慢请求卡住。

use anyhow::{bail, Result};

use crate::command::{Dispatcher, EventQueue, QueueEvent};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    queue: &mut EventQueue,
    dispatcher: &Dispatcher,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待下一个事件
        let Some(queued) = queue.next() else {
            bail!("event queue closed");
        };

        // 4. 翻译成消息
        let msg = match queued {
            QueueEvent::Input(input) => event::handle_event(input, app),
            QueueEvent::Delivery(delivery) => AppMessage::Delivered(delivery),
            QueueEvent::InputFailed(reason) => bail!("failed to read terminal input: {reason}"),
        };

        // 5. 更新状态并派发命令
        let commands = update::update(app, msg);
        dispatcher.issue_all(commands);
    }

    Ok(())
}
