use crate::error::{Result, SpacerError};
use crate::rules::types::Rule;
use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;
use tracing::{error, trace};

/// Characters that carry meaning inside a pattern and must be neutralised.
const METACHARACTERS: &[char] = &[
	'.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Compiled-size floor, matching the regex crate's own default.
const MIN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiled-size budget per byte of escaped pattern.
const SIZE_LIMIT_PER_BYTE: usize = 512;

/// Escape every pattern metacharacter in `input` with a backslash.
///
/// Only the characters in `. * + ? ^ $ { } ( ) | [ ] \` are touched, so the
/// result matches `input` literally.
pub fn escape_literal(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		if METACHARACTERS.contains(&c) {
			escaped.push('\\');
		}
		escaped.push(c);
	}
	escaped
}

/// One rule compiled into a literal-matching pattern.
#[derive(Debug)]
struct CompiledRule {
	pattern: Regex,
	replacement: String,
}

impl CompiledRule {
	/// Returns `None` for an empty search: empty patterns never match.
	fn compile(index: usize, rule: &Rule) -> Result<Option<Self>> {
		if rule.search.is_empty() {
			return Ok(None);
		}

		let escaped = escape_literal(&rule.search);
		let size_limit = escaped
			.len()
			.saturating_mul(SIZE_LIMIT_PER_BYTE)
			.max(MIN_SIZE_LIMIT);
		let pattern = RegexBuilder::new(&escaped)
			.size_limit(size_limit)
			.build()
			.map_err(|source| SpacerError::InvalidPattern {
				index,
				len: rule.search.len(),
				source,
			})?;

		Ok(Some(CompiledRule {
			pattern,
			replacement: rule.replace.clone(),
		}))
	}

	/// Replace every non-overlapping occurrence, scanning left to right.
	///
	/// Borrows `input` back when nothing matched.
	fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
		self.pattern.replace_all(input, NoExpand(&self.replacement))
	}
}

/// An immutable, compiled snapshot of a rule list.
///
/// Rules compose sequentially: each one runs on the output of the previous,
/// so a later rule can match text introduced by an earlier replacement.
#[derive(Debug, Default)]
pub struct TextTransformer {
	rules: Vec<CompiledRule>,
	skipped: usize,
}

impl TextTransformer {
	/// Compile `rules` in order.
	///
	/// Rules with an empty search are dropped. A rule that cannot be compiled
	/// is logged and dropped on its own; the rest still apply.
	pub fn new(rules: &[Rule]) -> Self {
		let mut transformer = TextTransformer::default();
		for (index, rule) in rules.iter().enumerate() {
			match CompiledRule::compile(index, rule) {
				Ok(Some(compiled)) => transformer.rules.push(compiled),
				Ok(None) => {}
				Err(e) => {
					error!(error = %e, "skipping rule");
					transformer.skipped += 1;
				}
			}
		}
		transformer
	}

	/// Number of rules that can actually match.
	pub fn active_rules(&self) -> usize {
		self.rules.len()
	}

	/// Number of rules dropped because they failed to compile.
	pub fn skipped_rules(&self) -> usize {
		self.skipped
	}

	pub fn transform(&self, text: &str) -> String {
		let mut output = text.to_string();
		for (i, rule) in self.rules.iter().enumerate() {
			let replaced = match rule.apply(&output) {
				Cow::Borrowed(_) => continue,
				Cow::Owned(replaced) => replaced,
			};
			trace!(rule = i, "rule applied");
			output = replaced;
		}
		output
	}
}

/// Compile `rules` and apply them to `text` in one step.
pub fn apply(text: &str, rules: &[Rule]) -> String {
	TextTransformer::new(rules).transform(text)
}
