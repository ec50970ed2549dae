pub mod action;
pub mod event;
pub mod notice;
pub mod task;
pub mod view;

pub use action::Action;
pub use event::{ArcEventTx, Event, EventTx};
pub use notice::{NoticeKind, NoticeMessage};
pub use task::{NewTask, StatusPatch, Task, TaskId, TaskStatus};
pub use view::{LOAD_FAILED_TEXT, MALFORMED_LIST_TEXT, TaskListView, TaskRow};
