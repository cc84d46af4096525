use crate::similarity::similarity;
use crate::tag_index::{NewTagIndex, OldTagIndex, TaggedRegion};
use crate::{LostCode, MergeConfig, MergeTarget, Result, StrategyRegistry, TextRange, apply_overdone_strategy};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Reconciles a freshly generated buffer with the previous generation of the same file.
///
/// Every user code region present in both buffers under the same name keeps the old content
/// at the new position. Whatever cannot be placed is returned as lost code. The merge never
/// fails. Malformed or unterminated tags are treated as untagged text.
#[derive(Debug, Clone)]
pub struct Merger {
	config: MergeConfig,
	registry: Arc<StrategyRegistry>,
}

/// Replacement of a range of the new buffer with old content.
#[derive(Debug)]
struct Splice {
	range: TextRange,
	replacement: String,
}

impl Merger {
	pub fn new(config: MergeConfig) -> Self {
		Self {
			config,
			registry: Arc::new(StrategyRegistry::new()),
		}
	}

	pub fn try_new(config: MergeConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self::new(config))
	}

	pub fn with_registry(mut self, registry: Arc<StrategyRegistry>) -> Self {
		self.registry = registry;
		self
	}

	pub fn config(&self) -> &MergeConfig {
		&self.config
	}

	/// Merges `old` into `new` in place and returns what could not be placed.
	pub fn merge(&self, target: &MergeTarget, new: &mut String, old: &str) -> LostCode {
		let begin_tag = self.config.begin_tag.as_str();
		let end_tag = self.config.end_tag.as_str();
		let mut lost = LostCode::new();

		// -- Index both buffers
		let mut old_index = OldTagIndex::build(old, begin_tag, end_tag, &mut lost);
		let new_index = NewTagIndex::build(new, begin_tag, end_tag);

		// -- Exact name matches
		let mut splices = Vec::with_capacity(new_index.iter().len());
		let mut unmatched_new: Vec<&TaggedRegion> = Vec::new();
		for region in &new_index {
			match old_index.take(&region.name) {
				Some(old_range) => splices.push(Splice {
					range: region.range,
					replacement: old_range.slice(old).to_string(),
				}),
				None => unmatched_new.push(region),
			}
		}
		let mut leftovers = old_index.into_leftovers();

		debug!(
			file = target.path().as_str(),
			matched = splices.len(),
			unmatched_new = unmatched_new.len(),
			leftovers = leftovers.len(),
			"user code regions matched"
		);

		// -- Fuzzy rename, only for a single region left on each side
		if let ([new_region], [old_region]) = (unmatched_new.as_slice(), leftovers.as_slice()) {
			let score = similarity(&old_region.name, &new_region.name);
			if score > self.config.fuzzy_threshold {
				warn!(
					from = old_region.name.as_str(),
					to = new_region.name.as_str(),
					score,
					"user code region renamed"
				);
				let content = old_region.range.slice(old);
				lost.push_moved(&old_region.name, &new_region.name, content);
				splices.push(Splice {
					range: new_region.range,
					replacement: content.to_string(),
				});
				leftovers.clear();
			}
		}

		// -- Orphans
		for region in &leftovers {
			let trailing = line_at(old, region.range.end);
			lost.push_orphaned(&region.name, region.range.slice(old), trailing);
		}

		apply_splices(new, splices);

		apply_overdone_strategy(&self.registry, target, old, new, &mut lost);

		lost
	}
}

/// Merges with the given tags and no overdone code strategy, returning the lost code text.
pub fn merge(target: &MergeTarget, new: &mut String, old: &str, begin_tag: &str, end_tag: &str) -> String {
	Merger::new(MergeConfig::new(begin_tag, end_tag))
		.merge(target, new, old)
		.into_string()
}

// region:    --- Support

/// Applies right to left so earlier ranges stay valid.
fn apply_splices(buffer: &mut String, mut splices: Vec<Splice>) {
	splices.sort_by(|a, b| b.range.cmp(&a.range));

	for splice in splices {
		trace!(begin = splice.range.begin, end = splice.range.end, len = splice.replacement.len(), "splice");
		buffer.replace_range(splice.range.begin..splice.range.end, &splice.replacement);
	}
}

/// Text from `offset` to the next newline (excluded) or the end of the buffer.
fn line_at(buffer: &str, offset: usize) -> &str {
	let rest = &buffer[offset..];
	match rest.find('\n') {
		Some(idx) => &rest[..idx],
		None => rest,
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
