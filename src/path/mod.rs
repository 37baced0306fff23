mod split;

pub use split::{Segments, fragment_route, split_segments};
