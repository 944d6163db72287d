//! 表单消息定义

/// 表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个焦点
    NextField,
    /// 上一个焦点
    PrevField,
    /// 切换按钮（←/→）
    SwitchButton,
    /// 确认（Enter）
    Confirm,
    /// 取消（Esc / Ctrl+C）
    Cancel,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
}
