// ─── Game Arguments ───
// Collects the game-argument template and resolves `${...}` placeholders.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::core::version::VersionDescriptor;

use super::classpath::safe_path_str;

pub const OFFLINE_USER_TYPE: &str = "legacy";
pub const VERSION_TYPE: &str = "\"WMML 0.1.26\"";

/// All-zero player UUID, hyphenated.
pub fn offline_uuid() -> String {
    Uuid::nil().hyphenated().to_string()
}

/// All-zero access token, 32 hex digits.
pub fn offline_access_token() -> String {
    Uuid::nil().simple().to_string()
}

/// Values available to the game-argument template.
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    pub root: &'a Path,
    pub version_id: &'a str,
    pub player_name: &'a str,
    pub asset_index_name: &'a str,
}

impl TemplateContext<'_> {
    /// Value for a placeholder key (the text between `${` and `}`).
    pub fn resolve(&self, key: &str) -> Option<Cow<'_, str>> {
        let value = match key {
            "auth_player_name" => Cow::Borrowed(self.player_name),
            "version_name" => Cow::Borrowed(self.version_id),
            "game_directory" => Cow::Owned(safe_path_str(&without_trailing_separator(self.root))),
            "assets_root" => Cow::Owned(safe_path_str(&self.root.join("assets"))),
            "assets_index_name" => Cow::Borrowed(self.asset_index_name),
            "auth_uuid" => Cow::Owned(offline_uuid()),
            "auth_access_token" => Cow::Owned(offline_access_token()),
            "user_type" => Cow::Borrowed(OFFLINE_USER_TYPE),
            "version_type" => Cow::Borrowed(VERSION_TYPE),
            _ => return None,
        };
        Some(value)
    }
}

// A normalized root ends with a separator; the rendered directory does not.
fn without_trailing_separator(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Substitute known placeholders in one left-to-right pass.
///
/// Substituted values are never rescanned. Unknown placeholders are kept verbatim.
pub fn substitute_placeholders(template: &str, ctx: &TemplateContext<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find('}').and_then(|end| Some((end, ctx.resolve(&after[..end])?))) {
            Some((end, value)) => {
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                out.push_str("${");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Raw template tokens: the legacy string split on single spaces, then the
/// string literals of `arguments.game`.
pub fn collect_game_argument_template(descriptor: &VersionDescriptor) -> Vec<&str> {
    let mut args: Vec<&str> = Vec::new();

    if let Some(legacy) = &descriptor.minecraft_arguments {
        args.extend(legacy.split(' '));
    }

    args.extend(descriptor.literal_game_args());
    args
}

/// Build the substituted game-argument string for a launch.
pub fn build_game_arguments(
    root: &Path,
    version_id: &str,
    player_name: &str,
    descriptor: &VersionDescriptor,
) -> String {
    let template = collect_game_argument_template(descriptor).join(" ");
    let ctx = TemplateContext {
        root,
        version_id,
        player_name,
        asset_index_name: descriptor.asset_index_name(),
    };

    substitute_placeholders(&template, &ctx).trim().to_string()
}
