pub mod recommendations;
pub mod suggestions;
pub mod title_search;

pub use recommendations::{recommend, Recommendation};
pub use title_search::search_titles;
