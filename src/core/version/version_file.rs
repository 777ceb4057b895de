// ─── Version File ───
// Shape of a version descriptor JSON, as far as launching consumes it.

use std::collections::HashMap;

use serde::Deserialize;

/// A parsed version descriptor (`versions/<id>/<id>.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    pub id: String,
    pub main_class: String,
    /// Asset index name (`assets` field).
    #[serde(default)]
    pub assets: Option<String>,
    #[serde(default)]
    pub libraries: Vec<LibraryEntry>,
    /// Modern argument lists (1.13+).
    #[serde(default)]
    pub arguments: Option<Arguments>,
    /// Legacy `minecraftArguments` field (pre-1.13).
    #[serde(default)]
    pub minecraft_arguments: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub game: Vec<ArgumentValue>,
}

/// One element of `arguments.game`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Literal(String),
    /// Rule-gated object form. Kept opaque; launching ignores it.
    Conditional(serde_json::Value),
}

impl ArgumentValue {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            ArgumentValue::Literal(s) => Some(s),
            ArgumentValue::Conditional(_) => None,
        }
    }
}

// ─── Library Entry with Rules ───

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryEntry {
    /// `group:artifact:version`
    pub name: String,
    #[serde(default)]
    pub rules: Option<Vec<LibraryRule>>,
    /// OS name → native classifier, possibly containing `${arch}`.
    #[serde(default)]
    pub natives: Option<HashMap<String, String>>,
}

impl LibraryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: None,
            natives: None,
        }
    }

    pub fn with_rules(mut self, rules: Vec<LibraryRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_native(mut self, os_name: &str, classifier: &str) -> Self {
        self.natives
            .get_or_insert_with(HashMap::new)
            .insert(os_name.to_string(), classifier.to_string());
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryRule {
    pub action: RuleAction,
    #[serde(default)]
    pub os: Option<OsRule>,
}

impl LibraryRule {
    pub fn allow() -> Self {
        Self {
            action: RuleAction::Allow,
            os: None,
        }
    }

    pub fn disallow() -> Self {
        Self {
            action: RuleAction::Disallow,
            os: None,
        }
    }

    pub fn on_os(mut self, name: &str, arch: Option<&str>) -> Self {
        self.os = Some(OsRule {
            name: Some(name.to_string()),
            arch: arch.map(str::to_string),
        });
        self
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Disallow,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsRule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arch: Option<String>,
}

impl VersionDescriptor {
    /// Asset index name, empty when the descriptor has none.
    pub fn asset_index_name(&self) -> &str {
        self.assets.as_deref().unwrap_or("")
    }

    /// String literals of `arguments.game`, in order. Conditional objects are dropped.
    pub fn literal_game_args(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .flat_map(|args| args.game.iter())
            .filter_map(ArgumentValue::as_literal)
    }
}
