// region:    --- Modules

mod error;
mod lost_code;
mod merge_config;
mod merge_target;
mod merger;
mod overdone_strategy;
mod similarity;
mod skeleton_diff;
mod tag_index;
mod tag_scanner;
mod text_range;

pub use error::*;
pub use lost_code::*;
pub use merge_config::*;
pub use merge_target::*;
pub use merger::*;
pub use overdone_strategy::*;
pub use similarity::*;
pub use skeleton_diff::*;
pub use tag_index::*;
pub use text_range::*;

// endregion: --- Modules

#[cfg(feature = "test-support")]
pub mod for_test {
	pub use crate::tag_scanner::find_next_tag;
}
