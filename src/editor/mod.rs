pub mod events;
pub mod session;

pub use events::{EditorEvent, EventSink, Notice, NoticeKind, create_event_channel};
pub use session::EditorSession;
