use crate::{Error, Result};

pub const DEFAULT_BEGIN_TAG: &str = "Start of user code";
pub const DEFAULT_END_TAG: &str = "End of user code";
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.5;

/// Tag literals and matching knobs for a merge.
///
/// Tags are matched as literal substrings. Whatever follows the begin tag on its line is the
/// region name.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeConfig {
	pub begin_tag: String,
	pub end_tag: String,
	/// A single leftover rename is applied only when the name similarity is strictly above this.
	pub fuzzy_threshold: f64,
}

impl Default for MergeConfig {
	fn default() -> Self {
		Self {
			begin_tag: DEFAULT_BEGIN_TAG.to_string(),
			end_tag: DEFAULT_END_TAG.to_string(),
			fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
		}
	}
}

impl MergeConfig {
	pub fn new(begin_tag: impl Into<String>, end_tag: impl Into<String>) -> Self {
		Self {
			begin_tag: begin_tag.into(),
			end_tag: end_tag.into(),
			..Default::default()
		}
	}

	pub fn with_begin_tag(mut self, begin_tag: impl Into<String>) -> Self {
		self.begin_tag = begin_tag.into();
		self
	}

	pub fn with_end_tag(mut self, end_tag: impl Into<String>) -> Self {
		self.end_tag = end_tag.into();
		self
	}

	pub fn with_fuzzy_threshold(mut self, fuzzy_threshold: f64) -> Self {
		self.fuzzy_threshold = fuzzy_threshold;
		self
	}

	pub fn validate(&self) -> Result<()> {
		let (begin, end) = (self.begin_tag.as_str(), self.end_tag.as_str());

		if begin.is_empty() || end.is_empty() {
			return Err(Error::invalid_tags(begin, end, "tags must not be empty"));
		}
		if begin.contains('\n') || end.contains('\n') {
			return Err(Error::invalid_tags(begin, end, "tags must fit on a single line"));
		}
		if begin == end {
			return Err(Error::invalid_tags(begin, end, "begin and end tags must differ"));
		}
		if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
			return Err(Error::InvalidThreshold(self.fuzzy_threshold));
		}

		Ok(())
	}
}

// region:    --- Tests


// endregion: --- Tests
