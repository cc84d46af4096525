/// Score returned for strings that are indistinguishable by bigrams but not equal.
pub const NEAR_EQUAL_SCORE: f64 = 0.999999;

/// Dice coefficient over the uppercased character bigrams of `a` and `b`, in `[0, 1]`.
///
/// `1.0` is returned only when `a == b`. Strings of one character compare by equality.
///
/// Odd-length strings carry one extra single-character "bigram" (their second to last
/// character). This weighting is kept as is so scores stay stable across versions.
pub fn similarity(a: &str, b: &str) -> f64 {
	let a_len = a.chars().count();
	let b_len = b.chars().count();

	if a_len == 1 || b_len == 1 {
		return if a == b { 1.0 } else { 0.0 };
	}

	let a_pairs = bigrams(a);
	let mut b_pairs = bigrams(b);
	let total = a_pairs.len() + b_pairs.len();
	if total == 0 {
		// both empty
		return if a == b { 1.0 } else { 0.0 };
	}

	let mut shared = 0usize;
	for pair in &a_pairs {
		if let Some(pos) = b_pairs.iter().position(|p| p == pair) {
			b_pairs.swap_remove(pos);
			shared += 1;
		}
	}

	let score = ((2 * shared) as f64 / total as f64).min(1.0);
	if score == 1.0 && a != b { NEAR_EQUAL_SCORE } else { score }
}

// region:    --- Support

fn bigrams(s: &str) -> Vec<String> {
	let chars: Vec<char> = s.to_uppercase().chars().collect();
	let len = chars.len();
	let mut pairs: Vec<String> = chars.windows(2).map(|w| w.iter().collect()).collect();

	// FIXME: The odd-length extra pair looks accidental, but dropping it moves scores
	//        across the fuzzy threshold for existing generated files.
	if len > 1 && len % 2 == 1 {
		pairs.push(chars[len - 2].to_string());
	}

	pairs
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
