//! 页面状态模块
//!
//! 定义各个视图的状态数据结构

mod clusters;
pub mod form;
mod topics;

pub use clusters::ClustersState;
pub use form::{ActiveForm, FormState, TopicDraft};
pub use topics::TopicsState;
