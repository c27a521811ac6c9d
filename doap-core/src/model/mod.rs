//! Project metadata read from build configuration.

mod contributor;
mod project;
mod record;
mod settings;

pub use contributor::Contributor;
pub use project::{IssueManagement, License, Organization, Project, Scm};
pub use record::{Field, Record, RecordBuilder, RecordError};
pub use settings::Settings;
