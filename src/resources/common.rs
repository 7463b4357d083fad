//! Argument validation shared by resource methods.

// std
use std::ops::RangeInclusive;
// self
use crate::error::ArgumentError;

/// Rejects empty or whitespace-only strings.
pub fn require_non_empty(name: &'static str, value: &str) -> Result<(), ArgumentError> {
	if value.trim().is_empty() { Err(ArgumentError::Empty { name }) } else { Ok(()) }
}

/// Rejects a path that is empty or only slashes.
pub fn require_path(name: &'static str, path: &str) -> Result<(), ArgumentError> {
	if path.trim().trim_matches('/').is_empty() { Err(ArgumentError::Empty { name }) } else { Ok(()) }
}

/// Rejects values outside `range`; absent values pass.
pub fn require_in_range<T>(
	name: &'static str,
	value: Option<T>,
	range: RangeInclusive<i64>,
) -> Result<(), ArgumentError>
where
	T: Into<i64>,
{
	let Some(value) = value.map(Into::into) else {
		return Ok(());
	};

	if range.contains(&value) {
		Ok(())
	} else {
		Err(ArgumentError::OutOfRange { name, value, min: *range.start(), max: *range.end() })
	}
}

/// Rejects the case where every member of a mutually-required set is absent.
pub fn require_any(names: &'static str, present: &[bool]) -> Result<(), ArgumentError> {
	if present.iter().any(|present| *present) { Ok(()) } else { Err(ArgumentError::MissingOneOf { names }) }
}

/// Rejects non-positive numeric identifiers.
pub fn require_id(name: &'static str, id: i64) -> Result<(), ArgumentError> {
	require_in_range(name, Some(id), 1..=i64::MAX)
}

/// Rejects lists containing an empty entry.
pub fn require_all_non_empty(name: &'static str, values: &[String]) -> Result<(), ArgumentError> {
	values.iter().try_for_each(|value| require_non_empty(name, value))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn non_empty_rejects_whitespace() {
		assert_eq!(require_non_empty("id", "  "), Err(ArgumentError::Empty { name: "id" }));
		assert!(require_non_empty("id", "a").is_ok());
	}

	#[test]
	fn path_rejects_bare_slashes() {
		assert!(require_path("path", "/").is_err());
		assert!(require_path("path", "").is_err());
		assert!(require_path("path", "/Shared").is_ok());
	}

	#[test]
	fn range_checks_only_present_values() {
		assert!(require_in_range::<u32>("count", None, 1..=100).is_ok());
		assert!(require_in_range("count", Some(100_u32), 1..=100).is_ok());
		assert_eq!(
			require_in_range("count", Some(0_u32), 1..=100),
			Err(ArgumentError::OutOfRange { name: "count", value: 0, min: 1, max: 100 })
		);
	}

	#[test]
	fn any_requires_one_present() {
		assert!(require_any("users or groups", &[false, true]).is_ok());
		assert_eq!(
			require_any("users or groups", &[false, false]),
			Err(ArgumentError::MissingOneOf { names: "users or groups" })
		);
	}

	#[test]
	fn ids_must_be_positive() {
		assert!(require_id("id", 0).is_err());
		assert!(require_id("id", 42).is_ok());
	}
}
