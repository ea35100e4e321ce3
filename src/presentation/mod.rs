mod components;
mod view;

pub use view::{PageView, UiContext, draw};
