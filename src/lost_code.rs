use derive_more::Display;

/// Why a block ended up in the lost code record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LostKind {
	/// Second (or later) region with an already indexed name in the old buffer.
	Duplicate,
	/// Region carried over under a different name by the fuzzy fallback.
	Moved,
	/// Old region with no counterpart in the new buffer.
	Orphaned,
	/// Content reported by an overdone code strategy.
	Overdone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LostEntry {
	pub kind: LostKind,
	pub name: String,
}

/// Append-only accumulator of the content a merge could not place.
///
/// The text is meant to be persisted by the caller (typically as a sibling `.lost` file)
/// for manual recovery. Each block ends with exactly one newline.
#[derive(Debug, Clone, Default)]
pub struct LostCode {
	text: String,
	entries: Vec<LostEntry>,
}

impl LostCode {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push_duplicate(&mut self, name: &str, content: &str) {
		self.push_block(LostKind::Duplicate, name, &format!("{name} (duplicate user code tag)"), content, "");
	}

	pub fn push_moved(&mut self, old_name: &str, new_name: &str, content: &str) {
		let header = format!("{old_name} (user code moved to '{new_name}')");
		self.push_block(LostKind::Moved, old_name, &header, content, "");
	}

	/// `trailing` is the old buffer line right after the region (its end tag line).
	pub fn push_orphaned(&mut self, name: &str, content: &str, trailing: &str) {
		self.push_block(LostKind::Orphaned, name, name, content, trailing);
	}

	pub fn push_overdone(&mut self, label: &str, content: &str) {
		self.push_block(LostKind::Overdone, label, &format!("{label} (overdone code)"), content, "");
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	pub fn entries(&self) -> &[LostEntry] {
		&self.entries
	}

	pub fn into_string(self) -> String {
		self.text
	}
}

// region:    --- Support

impl LostCode {
	fn push_block(&mut self, kind: LostKind, name: &str, header: &str, content: &str, trailing: &str) {
		// Payloads start with the newline closing the begin tag line.
		let separator = if content.starts_with('\n') { "" } else { "\n" };

		self.text.push_str(header);
		self.text.push_str(separator);
		self.text.push_str(content);
		self.text.push_str(trailing);
		if !self.text.ends_with('\n') {
			self.text.push('\n');
		}

		self.entries.push(LostEntry {
			kind,
			name: name.to_string(),
		});
	}
}

// endregion: --- Support

impl std::fmt::Display for LostCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;

	#[test]
	fn test_lost_code_orphaned_block_is_repastable() -> Result<()> {
		// -- Setup & Fixtures
		let mut lost = LostCode::new();

		// -- Exec
		lost.push_orphaned("x", "\nold1\n", "[END]");

		// -- Check
		assert_eq!(lost.as_str(), "x\nold1\n[END]\n");
		assert_eq!(lost.entries(), &[LostEntry {
			kind: LostKind::Orphaned,
			name: "x".to_string()
		}]);

		Ok(())
	}

	#[test]
	fn test_lost_code_blocks_end_with_single_newline() -> Result<()> {
		// -- Setup & Fixtures
		let mut lost = LostCode::new();

		// -- Exec
		lost.push_duplicate("a", "\nfirst\n");
		lost.push_moved("b", "b2", "\nsecond");
		lost.push_overdone("skeleton", "@@ -1 +1 @@\n-x\n+y\n");

		// -- Check
		assert_eq!(
			lost.as_str(),
			"a (duplicate user code tag)\nfirst\n\
			 b (user code moved to 'b2')\nsecond\n\
			 skeleton (overdone code)\n@@ -1 +1 @@\n-x\n+y\n"
		);
		assert_eq!(lost.entries().len(), 3);

		Ok(())
	}

	#[test]
	fn test_lost_code_empty() -> Result<()> {
		// -- Exec
		let lost = LostCode::new();

		// -- Check
		assert!(lost.is_empty());
		assert_eq!(lost.to_string(), "");

		Ok(())
	}
}

// endregion: --- Tests
