pub mod loader;
pub mod rules;
pub mod version_file;

pub use loader::{descriptor_path, DescriptorLoader, FsDescriptorLoader};
pub use rules::include_library;
pub use version_file::{
    ArgumentValue, Arguments, LibraryEntry, LibraryRule, OsRule, RuleAction, VersionDescriptor,
};
