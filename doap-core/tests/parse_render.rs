use chrono::{TimeZone, Utc};
use doap_core::error::ParseError;
use doap_core::{
    evaluate, parse_project_str, parse_record_str, parse_settings_str, render_doap, validate_doap,
    DocumentFormat, RenderOptions, Value,
};

fn project_yaml() -> &'static str {
    r#"
groupId: org.example
artifactId: widget
version: 2.1.0
name: Widget
description: A small widget. It does things & more.
url: https://example.org/widget
inceptionYear: "2019"
language: Rust
licenses:
  - name: Apache-2.0
    url: https://www.apache.org/licenses/LICENSE-2.0
scm:
  connection: scm:git:https://github.com/example/widget.git
  url: https://github.com/example/widget
issueManagement:
  system: GitHub
  url: https://github.com/example/widget/issues
developers:
  - id: ada
    name: Ada Lovelace
    email: ada@example.org
    organization: Example Org
    organizationUrl: https://example.org
    roles: [Lead Maintainer]
  - id: grace
    name: Grace Hopper
    email: not-an-email
    organization: Example Org
contributors:
  - name: Linus
    roles: [documentation writer, Documenter]
  - name: Former
    roles: [emeritus]
properties:
  tagline: "${project.name} by ${project.organization.name}"
"#
}

fn render_options() -> RenderOptions {
    RenderOptions {
        generated_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap(),
        ..Default::default()
    }
}

#[test]
fn parse_yaml_project() {
    let parsed = parse_project_str(project_yaml(), DocumentFormat::Auto).unwrap();
    assert_eq!(parsed.format, DocumentFormat::Yaml);
    let project = parsed.document;
    assert_eq!(project.id(), "org.example:widget:2.1.0");
    assert!(!project.is_snapshot());
    assert_eq!(project.developers.len(), 2);
    assert_eq!(project.developers[0].roles, ["Lead Maintainer"]);
}

#[test]
fn parse_auto_detects_json_project() {
    let json = r#"{ "name": "Widget", "licenses": [ { "name": "MIT" } ] }"#;
    let parsed = parse_project_str(json, DocumentFormat::Auto).unwrap();
    assert_eq!(parsed.format, DocumentFormat::Json);
    assert_eq!(
        evaluate("licenses[0].name", &parsed.document).unwrap(),
        Some(Value::from("MIT"))
    );
}

#[test]
fn parse_rejects_empty_input() {
    let err = parse_project_str("   ", DocumentFormat::Auto).unwrap_err();
    assert!(matches!(err, ParseError::UnknownFormat));
}

#[test]
fn settings_default_to_interactive() {
    let parsed = parse_settings_str("offline: true\n", DocumentFormat::Yaml).unwrap();
    assert!(parsed.document.offline);
    assert!(parsed.document.interactive_mode);
}

#[test]
fn record_documents_must_be_mappings() {
    assert!(parse_record_str("[1, 2]", DocumentFormat::Json).is_err());
    let parsed = parse_record_str("service:\n  port: 8080\n", DocumentFormat::Yaml).unwrap();
    assert_eq!(
        evaluate("service.port", &parsed.document).unwrap(),
        Some(Value::Int(8080))
    );
}

#[test]
fn renders_project_description() {
    let project = parse_project_str(project_yaml(), DocumentFormat::Yaml)
        .unwrap()
        .document;
    let xml = render_doap(&project, None, &render_options()).unwrap();
    assert_eq!(validate_doap(&xml), Vec::<String>::new());

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("DO NOT EDIT THIS FILE!"));
    assert!(xml.contains("<Project rdf:about=\"https://example.org/widget\">"));
    assert!(xml.contains("<name>Widget</name>"));
    assert!(xml.contains("<shortdesc>A small widget.</shortdesc>"));
    assert!(xml.contains("<description>A small widget. It does things &amp; more.</description>"));
    assert!(xml.contains("<created>2019-01-01</created>"));
    assert!(xml.contains("<license rdf:resource=\"https://www.apache.org/licenses/LICENSE-2.0\"/>"));
    assert!(xml.contains("<programming-language>Rust</programming-language>"));
    assert!(xml.contains("<bug-database rdf:resource=\"https://github.com/example/widget/issues\"/>"));
    assert!(xml.contains("<GitRepository>"));
    assert!(xml.contains("<location rdf:resource=\"https://github.com/example/widget.git\"/>"));
}

#[test]
fn renders_people_by_role_and_their_organizations() {
    let project = parse_project_str(project_yaml(), DocumentFormat::Yaml)
        .unwrap()
        .document;
    let xml = render_doap(&project, None, &render_options()).unwrap();

    assert!(xml.contains("<maintainer>"));
    assert!(xml.contains("<foaf:name>Ada Lovelace</foaf:name>"));
    assert!(xml.contains("<foaf:mbox rdf:resource=\"mailto:ada@example.org\"/>"));
    // Invalid addresses are left out.
    assert!(!xml.contains("not-an-email"));
    // No recognised role: still a developer.
    assert!(xml.contains("<developer>"));
    assert!(xml.contains("<documenter>"));
    assert!(!xml.contains("Former"));

    assert_eq!(xml.matches("<foaf:Organization>").count(), 1);
    assert!(xml.contains("<foaf:member rdf:nodeID=\"b1\"/>"));
    assert!(xml.contains("<foaf:member rdf:nodeID=\"b2\"/>"));
}

#[test]
fn unresolved_values_are_left_out() {
    let mut project = parse_project_str(project_yaml(), DocumentFormat::Yaml)
        .unwrap()
        .document;
    project.language = Some("${project.missing}".to_string());
    project.name = Some("${project.artifactId}".to_string());
    let xml = render_doap(
        &project,
        None,
        &RenderOptions {
            header: false,
            ..render_options()
        },
    )
    .unwrap();
    assert!(!xml.contains("programming-language"));
    assert!(xml.contains("<name>widget</name>"));
    assert!(!xml.contains("DO NOT EDIT"));
}
