//! Legacy field-name aliases.

use super::value::RawMap;

/// Legacy field → canonical field.
pub const FIELD_ALIASES: &[(&str, &str)] = &[("command", "id"), ("description", "name")];

/// Rewrite legacy field names to canonical ones, in place.
///
/// A legacy field is moved only when its canonical field is absent, so a
/// second call is a no-op.
pub fn normalize_aliases(map: &mut RawMap) {
    for (legacy, canonical) in FIELD_ALIASES {
        if map.contains_key(canonical) {
            continue;
        }
        if let Some(value) = map.remove(legacy) {
            map.insert(*canonical, value);
        }
    }
}
