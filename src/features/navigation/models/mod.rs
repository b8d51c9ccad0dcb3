mod page;

pub use page::{NavigationState, Page};
