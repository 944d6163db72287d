//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态
//!         pub mod domain;     // 列表投影（DisplayItem）
//!         pub mod state;      // 各视图状态与通用表单
//!         mod view_state;     // ViewState 枚举
//!
//!
//!     App 的形状：
//!
//!         App {
//!             should_quit,
//!             view: ViewState,                // 当前视图，同一时刻只有一个
//!             epoch: u64,                     // 视图纪元
//!             status_message, error,
//!             clusters: ClustersState,        // 集群列表
//!             topics: TopicsState,            // Topic 列表
//!             detail: Option<TopicDetail>,    // Topic 详情
//!             form: Option<ActiveForm>,       // 打开的表单
//!             connection: Option<Arc<dyn ClusterClient>>,
//!         }
//!
//!
//!     视图之间的转换：
//!
//!         ClusterList ──enter(Connected)──▶ TopicList ──enter──▶ TopicDetail ──m──▶ MessageViewport
//!              │  ▲                          │  ▲   ▲                │
//!            a/e│  │submit/cancel          n/e│  │   └────esc────────┘
//!              ▼  │                          ▼  │submit/cancel
//!         AddCluster / EditCluster       AddTopic / EditTopic
//!
//!     每次 enter_view 都会让纪元加一。视图级命令（连接、列表、详情）
//!     带着发出时的纪元；结果回来时纪元已经变了就直接丢弃，
//!     这样慢请求的结果不会覆盖用户已经离开的视图。
//!

mod app;
pub mod domain;
pub mod state;
mod view_state;

pub use app::App;
pub use state::{ActiveForm, ClustersState, TopicsState};
pub use view_state::ViewState;
