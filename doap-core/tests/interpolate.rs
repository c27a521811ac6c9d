use std::collections::BTreeMap;

use doap_core::interpolation::{EnvSource, ObjectSource, PropertiesSource};
use doap_core::model::{Contributor, License};
use doap_core::{interpolate, project_interpolator, Interpolator, Project, Settings};

fn project() -> Project {
    let mut developer1 = Contributor::named("developerName1");
    developer1.id = Some("id1".to_string());
    let mut developer2 = Contributor::named("developerName2");
    developer2.id = Some("id1".to_string());

    let mut project = Project {
        name: Some("projectName".to_string()),
        description: Some("projectDescription".to_string()),
        licenses: vec![License {
            name: Some("licenseName".to_string()),
            url: Some("licenseUrl".to_string()),
            ..Default::default()
        }],
        developers: vec![developer1, developer2],
        ..Default::default()
    };
    project
        .properties
        .insert("myKey".to_string(), "myValue".to_string());
    project
}

#[test]
fn project_values_are_substituted() {
    let project = project();
    assert_eq!(
        interpolate("${project.name}", &project, None).as_deref(),
        Some("projectName")
    );
    assert_eq!(
        interpolate("my name is ${project.name}", &project, None).as_deref(),
        Some("my name is projectName")
    );
    assert_eq!(
        interpolate("${pom.description}", &project, None).as_deref(),
        Some("projectDescription")
    );
}

#[test]
fn unresolved_placeholder_inside_text_is_kept() {
    let project = project();
    assert_eq!(
        interpolate("my name is ${project.invalid}", &project, None).as_deref(),
        Some("my name is ${project.invalid}")
    );
}

#[test]
fn unresolved_leading_placeholder_yields_none() {
    let project = project();
    assert_eq!(interpolate("${project.licenses.name}", &project, None), None);
    assert_eq!(interpolate("${project.licenses[1].name}", &project, None), None);
}

#[test]
fn indexed_lists_are_substituted() {
    let project = project();
    assert_eq!(
        interpolate("${project.licenses[0].name}", &project, None).as_deref(),
        Some("licenseName")
    );
    assert!(interpolate("${project.developers}", &project, None).is_some());
    assert_eq!(
        interpolate("${project.developers[0].name}", &project, None).as_deref(),
        Some("developerName1")
    );
    assert_eq!(
        interpolate("${project.developers[1].name}", &project, None).as_deref(),
        Some("developerName2")
    );
}

#[test]
fn project_properties_are_substituted() {
    let project = project();
    assert_eq!(
        interpolate("${myKey}", &project, None).as_deref(),
        Some("myValue")
    );
}

#[test]
fn text_without_placeholders_is_trimmed() {
    let project = project();
    assert_eq!(
        interpolate("  plain text ", &project, None).as_deref(),
        Some("plain text")
    );
}

#[test]
fn settings_are_reachable_under_their_prefix() {
    let project = project();
    let settings = Settings {
        offline: true,
        ..Default::default()
    };
    assert_eq!(
        interpolate("offline=${settings.offline}", &project, Some(&settings)).as_deref(),
        Some("offline=true")
    );
    assert_eq!(
        interpolate("${settings.interactiveMode}", &project, Some(&settings)).as_deref(),
        Some("true")
    );
}

#[test]
fn overrides_take_precedence_over_project_properties() {
    let project = project();
    let overrides = BTreeMap::from([("myKey".to_string(), "override".to_string())]);
    let mut interpolator = project_interpolator(&project, None, Some(&overrides));
    assert_eq!(interpolator.interpolate("${myKey}"), "override");
}

#[test]
fn environment_source_reads_env_prefix() {
    let env = EnvSource::from_vars(BTreeMap::from([("HOME".to_string(), "/home/doap".to_string())]));
    let mut interpolator = Interpolator::new().with_source(env);
    assert_eq!(interpolator.interpolate("${env.HOME}/x"), "/home/doap/x");
    assert_eq!(interpolator.interpolate("${HOME}"), "${HOME}");
}

#[test]
fn first_source_with_a_value_wins() {
    let first = BTreeMap::from([("k".to_string(), "first".to_string())]);
    let second = BTreeMap::from([
        ("k".to_string(), "second".to_string()),
        ("other".to_string(), "only-second".to_string()),
    ]);
    let mut interpolator = Interpolator::new()
        .with_source(PropertiesSource::new("first", &first))
        .with_source(PropertiesSource::new("second", &second));
    assert_eq!(interpolator.interpolate("${k} ${other}"), "first only-second");
}

#[test]
fn resolved_values_are_expanded_again() {
    let props = BTreeMap::from([
        ("greeting".to_string(), "hello ${who}".to_string()),
        ("who".to_string(), "world".to_string()),
    ]);
    let mut interpolator = Interpolator::new().with_source(PropertiesSource::new("test", &props));
    assert_eq!(interpolator.interpolate("${greeting}!"), "hello world!");
    assert!(interpolator.feedback().is_empty());
}

#[test]
fn reference_cycles_stay_unresolved_with_feedback() {
    let props = BTreeMap::from([
        ("a".to_string(), "${b}".to_string()),
        ("b".to_string(), "${a}".to_string()),
    ]);
    let mut interpolator = Interpolator::new().with_source(PropertiesSource::new("test", &props));
    assert_eq!(interpolator.interpolate("${a}"), "${a}");
    let feedback = interpolator.feedback();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].expression, "a");
    assert!(feedback[0].message.contains("reference cycle"));

    interpolator.clear_feedback();
    assert!(interpolator.feedback().is_empty());
}

#[test]
fn evaluation_failures_are_reported_as_feedback() {
    let project = project();
    let mut interpolator = Interpolator::new().with_source(ObjectSource::new(&project));
    assert_eq!(
        interpolator.interpolate("${licenses[3].name}"),
        "${licenses[3].name}"
    );
    let feedback = interpolator.feedback();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].expression, "licenses[3].name");
    assert!(feedback[0].message.contains("out of range"));
}

#[test]
fn malformed_expressions_pass_through() {
    let project = project();
    assert_eq!(
        interpolate("x ${project..name}", &project, None).as_deref(),
        Some("x ${project..name}")
    );
    assert_eq!(
        interpolate("x ${project.name.}", &project, None).as_deref(),
        Some("x ${project.name.}")
    );
    // A bracket that isn't an index is dropped along with its text.
    assert_eq!(
        interpolate("${project.name[x]}", &project, None).as_deref(),
        Some("projectName")
    );
}
