pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table_row;

pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use list_item::{ListItem, ListMarker};
pub use table_row::TableRow;
