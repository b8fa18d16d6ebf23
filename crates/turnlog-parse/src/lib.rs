mod extract;
mod render;
mod scan;

pub use extract::extract_region;
pub use render::render_turns;
pub use scan::parse;
