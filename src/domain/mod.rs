pub mod branch_prefixes;
pub mod dotted_path;
pub mod location;

pub use branch_prefixes::BranchPrefixes;
pub use dotted_path::DottedPath;
pub use location::VersionLocation;
