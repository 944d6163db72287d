//! 列表视图消息定义

/// 列表视图中的操作消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 选择第一项
    SelectFirst,
    /// 选择最后一项
    SelectLast,
    /// 进入选中项
    Confirm,

    // ========== CRUD 操作 ==========
    /// 新建
    Add,
    /// 编辑
    Edit,
    /// 删除
    Delete,
    /// 刷新当前列表
    Refresh,

    // ========== 视图跳转 ==========
    /// 返回上一级
    Back,
    /// 回到集群列表
    Home,
    /// 打开消息视图
    Messages,
}
