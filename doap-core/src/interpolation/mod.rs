//! `${expression}` substitution over environment, properties and project metadata.

mod interpolator;
mod source;

use std::collections::BTreeMap;

pub use interpolator::{Feedback, Interpolator};
pub use source::{EnvSource, ObjectSource, PrefixedObjectSource, PropertiesSource, ValueSource};

use crate::model::{Project, Settings};

/// Interpolator over the standard sources for a project, in precedence order:
///
/// 1. environment variables (`env.NAME`)
/// 2. `overrides`, then the project's own properties
/// 3. the project under `project.` and `pom.`
/// 4. the project with the first token of the expression ignored
/// 5. the settings under `settings.`, when given
pub fn project_interpolator<'a>(
    project: &'a Project,
    settings: Option<&'a Settings>,
    overrides: Option<&'a BTreeMap<String, String>>,
) -> Interpolator<'a> {
    let mut interpolator = Interpolator::new();
    interpolator.add_source(EnvSource::from_process());
    if let Some(overrides) = overrides {
        interpolator.add_source(PropertiesSource::new("override", overrides));
    }
    interpolator
        .add_source(PropertiesSource::new("project", &project.properties))
        .add_source(PrefixedObjectSource::new(["project", "pom"], project))
        .add_source(ObjectSource::trimming_root_token(project));
    if let Some(settings) = settings {
        interpolator.add_source(PrefixedObjectSource::new(["settings"], settings));
    }
    interpolator
}

/// Interpolate `value` with the project and settings.
///
/// Returns the trimmed result, or `None` when the result still starts with an
/// unresolved placeholder.
pub fn interpolate(value: &str, project: &Project, settings: Option<&Settings>) -> Option<String> {
    if !value.contains("${") {
        return Some(value.trim().to_string());
    }
    let mut interpolator = project_interpolator(project, settings, None);
    finish(&mut interpolator, value)
}

/// Apply the same pass-through and failure rules as [`interpolate`] with a caller-built
/// interpolator.
pub fn finish(interpolator: &mut Interpolator<'_>, value: &str) -> Option<String> {
    if !value.contains("${") {
        return Some(value.trim().to_string());
    }
    let interpolated = interpolator.interpolate(value);
    let trimmed = interpolated.trim();
    if trimmed.starts_with("${") {
        return None;
    }
    Some(trimmed.to_string())
}
