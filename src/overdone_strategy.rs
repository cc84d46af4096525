use crate::{LostCode, MergeTarget, Result};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry key used when no strategy is registered for the target's discriminator.
pub const WILDCARD: &str = "*";

/// Format specific reconciliation of leftover content that is not enclosed by user code tags.
///
/// Runs after the tag based merge. It may edit `new` and may append to `lost`.
pub trait OverdoneStrategy: Send + Sync {
	fn reconcile(&self, target: &MergeTarget, old: &str, new: &mut String, lost: &mut LostCode);
}

pub type StrategyEntries = Vec<(String, Arc<dyn OverdoneStrategy>)>;

type StrategyLoader = dyn Fn() -> Result<StrategyEntries> + Send + Sync;

/// Discriminator keyed overdone code strategies.
///
/// Entries are either registered eagerly, or produced by a loader that runs once on first
/// lookup. Concurrent first lookups wait on the same initialization.
pub struct StrategyRegistry {
	entries: OnceCell<HashMap<String, Arc<dyn OverdoneStrategy>>>,
	loader: Option<Box<StrategyLoader>>,
}

impl StrategyRegistry {
	pub fn new() -> Self {
		Self {
			entries: OnceCell::with_value(HashMap::new()),
			loader: None,
		}
	}

	/// A loader error is logged and leaves the registry empty.
	pub fn from_loader(loader: impl Fn() -> Result<StrategyEntries> + Send + Sync + 'static) -> Self {
		Self {
			entries: OnceCell::new(),
			loader: Some(Box::new(loader)),
		}
	}

	pub fn with_strategy(mut self, key: impl Into<String>, strategy: impl OverdoneStrategy + 'static) -> Self {
		self.insert(key, Arc::new(strategy));
		self
	}

	/// Replaces any strategy registered under `key`. Forces the loader to run first.
	pub fn insert(&mut self, key: impl Into<String>, strategy: Arc<dyn OverdoneStrategy>) {
		if self.entries.get().is_none() {
			let loaded = load_entries(self.loader.as_deref());
			let _ = self.entries.set(loaded);
		}
		if let Some(entries) = self.entries.get_mut() {
			entries.insert(key.into(), strategy);
		}
	}

	/// Looks up `discriminator`, falling back to the `"*"` entry.
	pub fn resolve(&self, discriminator: &str) -> Option<Arc<dyn OverdoneStrategy>> {
		let entries = self.entries.get_or_init(|| load_entries(self.loader.as_deref()));
		entries.get(discriminator).or_else(|| entries.get(WILDCARD)).cloned()
	}

	/// Number of registered strategies (runs the loader if needed).
	pub fn len(&self) -> usize {
		self.entries.get_or_init(|| load_entries(self.loader.as_deref())).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for StrategyRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for StrategyRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let keys: Option<Vec<&String>> = self.entries.get().map(|e| e.keys().collect());
		f.debug_struct("StrategyRegistry")
			.field("keys", &keys)
			.field("lazy", &self.loader.is_some())
			.finish()
	}
}

// region:    --- Hook

/// Runs the strategy resolved for `target`, if any.
///
/// No-op when the target has no previous generation on disk.
pub fn apply_overdone_strategy(
	registry: &StrategyRegistry,
	target: &MergeTarget,
	old: &str,
	new: &mut String,
	lost: &mut LostCode,
) {
	if !target.exists() {
		return;
	}

	let discriminator = target.discriminator();
	let Some(strategy) = registry.resolve(discriminator) else {
		return;
	};

	debug!(file = target.path().as_str(), discriminator, "applying overdone code strategy");
	strategy.reconcile(target, old, new, lost);
}

// endregion: --- Hook

// region:    --- Support

fn load_entries(loader: Option<&StrategyLoader>) -> HashMap<String, Arc<dyn OverdoneStrategy>> {
	let Some(loader) = loader else {
		return HashMap::new();
	};

	match loader() {
		Ok(entries) => entries.into_iter().collect(),
		Err(err) => {
			warn!(error = %err, "overdone code strategies unavailable");
			HashMap::new()
		}
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
