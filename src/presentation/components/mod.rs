mod body;
mod fields;
mod footer;
mod grid;
mod sidebar;

pub use body::render_body;
pub use footer::render_footer;
pub use sidebar::render_sidebar;
