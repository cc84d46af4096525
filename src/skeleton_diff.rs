use crate::tag_index::scan_regions;
use crate::{LostCode, MergeConfig, MergeTarget, OverdoneStrategy};
use diffy::{Line, create_patch};
use tracing::debug;

/// Reports hand edits made outside of user code regions.
///
/// Both buffers are reduced to their skeleton (every tagged payload blanked out) and diffed.
/// Lines the old skeleton has and the new one lacks were overwritten by the regeneration, so
/// they are appended to the lost code, grouped under their old hunk header. Lines only the new
/// generation added are already in the output and are not reported. The new buffer is left
/// untouched.
#[derive(Debug, Clone)]
pub struct SkeletonDiffStrategy {
	begin_tag: String,
	end_tag: String,
}

impl SkeletonDiffStrategy {
	pub fn new(begin_tag: impl Into<String>, end_tag: impl Into<String>) -> Self {
		Self {
			begin_tag: begin_tag.into(),
			end_tag: end_tag.into(),
		}
	}

	pub fn from_config(config: &MergeConfig) -> Self {
		Self::new(&config.begin_tag, &config.end_tag)
	}

	fn skeleton(&self, buffer: &str) -> String {
		let mut out = String::with_capacity(buffer.len());
		let mut copied_to = 0;

		for region in scan_regions(buffer, &self.begin_tag, &self.end_tag) {
			out.push_str(&buffer[copied_to..region.range.begin]);
			out.push('\n');
			copied_to = region.range.end;
		}
		out.push_str(&buffer[copied_to..]);

		out
	}
}

impl OverdoneStrategy for SkeletonDiffStrategy {
	fn reconcile(&self, target: &MergeTarget, old: &str, new: &mut String, lost: &mut LostCode) {
		let old_skeleton = self.skeleton(old);
		let new_skeleton = self.skeleton(new);
		if old_skeleton == new_skeleton {
			return;
		}

		let patch = create_patch(&old_skeleton, &new_skeleton);
		let mut removed = String::new();
		let mut hunks = 0;
		for hunk in patch.hunks() {
			let deleted: Vec<&str> = hunk
				.lines()
				.iter()
				.filter_map(|line| match line {
					Line::Delete(text) => Some(*text),
					_ => None,
				})
				.collect();
			if deleted.is_empty() {
				continue;
			}

			hunks += 1;
			let old_range = hunk.old_range();
			removed.push_str(&format!("@@ -{},{} @@\n", old_range.start(), old_range.len()));
			for text in deleted {
				removed.push('-');
				removed.push_str(text.strip_suffix('\n').unwrap_or(text));
				removed.push('\n');
			}
		}

		if hunks == 0 {
			return;
		}

		debug!(file = target.path().as_str(), hunks, "code removed outside user code");
		lost.push_overdone(target.path().as_str(), &removed);
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use crate::LostKind;

	#[test]
	fn test_skeleton_diff_skeleton_blanks_payloads() -> Result<()> {
		// -- Setup & Fixtures
		let strategy = SkeletonDiffStrategy::new("[BEGIN]", "[END]");
		let buffer = "A\n[BEGIN] x\nuser\nlines\n[END]\nB\n";

		// -- Exec
		let skeleton = strategy.skeleton(buffer);

		// -- Check
		assert_eq!(skeleton, "A\n[BEGIN] x\n[END]\nB\n");

		Ok(())
	}

	#[test]
	fn test_skeleton_diff_reports_edit_outside_regions() -> Result<()> {
		// -- Setup & Fixtures
		let strategy = SkeletonDiffStrategy::new("[BEGIN]", "[END]");
		let target = MergeTarget::new_with_exists("gen/Model.java", true);
		let old = "class A {\n  int hand;\n[BEGIN] x\nkeep\n[END]\n}\n";
		let mut new = "class A {\n[BEGIN] x\nkeep\n[END]\n}\n".to_string();
		let mut lost = LostCode::new();

		// -- Exec
		strategy.reconcile(&target, old, &mut new, &mut lost);

		// -- Check
		assert_eq!(lost.entries().len(), 1);
		assert_eq!(lost.entries()[0].kind, LostKind::Overdone);
		assert!(lost.as_str().starts_with("gen/Model.java (overdone code)\n"));
		assert!(lost.as_str().contains("-  int hand;\n"));
		assert_eq!(new, "class A {\n[BEGIN] x\nkeep\n[END]\n}\n");

		Ok(())
	}

	#[test]
	fn test_skeleton_diff_ignores_template_additions() -> Result<()> {
		// -- Setup & Fixtures
		let strategy = SkeletonDiffStrategy::new("[BEGIN]", "[END]");
		let target = MergeTarget::new_with_exists("gen/A.java", true);
		let old = "class A {\n[BEGIN] x\nmine\n[END]\n}\n";
		let mut new = "class A {\n  int added;\n[BEGIN] x\nmine\n[END]\n}\n".to_string();
		let mut lost = LostCode::new();

		// -- Exec
		strategy.reconcile(&target, old, &mut new, &mut lost);

		// -- Check
		assert!(lost.is_empty(), "Expected no lost code, got: {lost}");

		Ok(())
	}

	#[test]
	fn test_skeleton_diff_reports_only_removed_lines() -> Result<()> {
		// -- Setup & Fixtures
		let strategy = SkeletonDiffStrategy::new("[BEGIN]", "[END]");
		let target = MergeTarget::new_with_exists("gen/A.java", true);
		let old = "class A {\n  int hand;\n[BEGIN] x\n[END]\n}\n";
		let mut new = "class A {\n  int generated;\n[BEGIN] x\n[END]\n}\n".to_string();
		let mut lost = LostCode::new();

		// -- Exec
		strategy.reconcile(&target, old, &mut new, &mut lost);

		// -- Check
		assert_eq!(lost.entries().len(), 1);
		assert!(lost.as_str().starts_with("gen/A.java (overdone code)\n@@ -"));
		assert!(lost.as_str().ends_with("\n-  int hand;\n"));
		assert!(!lost.as_str().contains("generated"));

		Ok(())
	}

	#[test]
	fn test_skeleton_diff_ignores_payload_changes() -> Result<()> {
		// -- Setup & Fixtures
		let strategy = SkeletonDiffStrategy::new("[BEGIN]", "[END]");
		let target = MergeTarget::new_with_exists("gen/Model.java", true);
		let old = "A\n[BEGIN] x\nold\n[END]\nB\n";
		let mut new = "A\n[BEGIN] x\nnew\n[END]\nB\n".to_string();
		let mut lost = LostCode::new();

		// -- Exec
		strategy.reconcile(&target, old, &mut new, &mut lost);

		// -- Check
		assert!(lost.is_empty());

		Ok(())
	}
}

// endregion: --- Tests
