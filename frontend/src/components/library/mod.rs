mod editor;
mod list;

pub use editor::ResourceEditor;
pub use list::ResourceList;
