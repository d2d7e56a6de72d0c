pub mod drag;
pub mod drop;
pub mod editor;
pub mod factory;
pub mod mutate;

pub use drag::{DragPayload, DragSession, DropTarget};
pub use drop::Zone;
pub use editor::TemplateEditor;
pub use factory::NewElement;
pub use mutate::Direction;
