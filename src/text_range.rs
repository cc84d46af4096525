/// Half-open byte range `[begin, end)` into a text buffer.
///
/// Ordering is by `begin` first, then `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
	pub begin: usize,
	pub end: usize,
}

impl TextRange {
	pub fn new(begin: usize, end: usize) -> Self {
		debug_assert!(begin <= end, "TextRange begin {begin} > end {end}");
		Self { begin, end }
	}

	pub fn len(&self) -> usize {
		self.end - self.begin
	}

	pub fn is_empty(&self) -> bool {
		self.begin == self.end
	}

	/// Returns the text covered by this range.
	///
	/// The range must come from the same buffer (or an unmutated copy of it).
	pub fn slice<'a>(&self, buffer: &'a str) -> &'a str {
		&buffer[self.begin..self.end]
	}
}
