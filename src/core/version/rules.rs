// ─── Library Rules ───
// Decides whether a library entry applies to a platform.

use crate::core::platform::Platform;

use super::version_file::{LibraryEntry, LibraryRule, OsRule, RuleAction};

/// Evaluate a library's rules against `platform`.
///
/// - No rules (or an empty list) → included.
/// - Rules run top-to-bottom over a running decision that starts as `true`.
/// - `allow` without `os` → `true`. `allow` with `os` → `true` when the OS
///   matches (and the arch, if given, equals the platform arch), else `false`.
/// - `disallow` without `os` → `false`. `disallow` with a matching OS → `false`;
///   a non-matching OS leaves the decision unchanged.
///
/// Note the asymmetry: a non-matching `allow` forces `false`, a non-matching
/// `disallow` does not touch the decision.
pub fn include_library(entry: &LibraryEntry, platform: &Platform) -> bool {
    let rules = match &entry.rules {
        Some(r) if !r.is_empty() => r,
        _ => return true,
    };

    rules
        .iter()
        .fold(true, |should_include, rule| apply_rule(should_include, rule, platform))
}

fn apply_rule(current: bool, rule: &LibraryRule, platform: &Platform) -> bool {
    match (rule.action, &rule.os) {
        (RuleAction::Allow, None) => true,
        (RuleAction::Allow, Some(os)) => {
            if !os_name_matches(os, platform) {
                return false;
            }
            match &os.arch {
                Some(arch) => arch == platform.arch(),
                None => true,
            }
        }
        (RuleAction::Disallow, None) => false,
        (RuleAction::Disallow, Some(os)) => {
            if os_name_matches(os, platform) {
                false
            } else {
                current
            }
        }
    }
}

// An `os` block without a name constrains nothing about the OS.
fn os_name_matches(os: &OsRule, platform: &Platform) -> bool {
    match &os.name {
        Some(name) => name == platform.os_name(),
        None => true,
    }
}

impl LibraryEntry {
    pub fn is_allowed_for(&self, platform: &Platform) -> bool {
        include_library(self, platform)
    }
}
