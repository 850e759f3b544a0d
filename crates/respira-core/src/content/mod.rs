mod anatomy;

pub use anatomy::{AnatomyAtlas, AnatomyInfo};
