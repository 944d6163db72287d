//! 各视图的页面内容

pub mod clusters;
pub mod messages;
pub mod topic_detail;
pub mod topics;
