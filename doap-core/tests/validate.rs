use doap_core::{render_doap, validate_doap, Project, RenderOptions};

const VALID: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xml:lang="en" xmlns="http://usefulinc.com/ns/doap#"
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:foaf="http://xmlns.com/foaf/0.1/">
  <Project rdf:about="https://example.org/widget">
    <name>Widget</name>
    <maintainer>
      <foaf:Person rdf:nodeID="b1">
        <foaf:name>Ada</foaf:name>
      </foaf:Person>
    </maintainer>
  </Project>
</rdf:RDF>
"#;

#[test]
fn accepts_a_well_formed_document() {
    assert_eq!(validate_doap(VALID), Vec::<String>::new());
}

#[test]
fn rendered_documents_validate() {
    let project = Project {
        name: Some("Widget".to_string()),
        url: Some("https://example.org/widget".to_string()),
        developers: vec![doap_core::Contributor::named("Ada").with_role("maintainer")],
        ..Default::default()
    };
    let xml = render_doap(&project, None, &RenderOptions::default()).unwrap();
    assert_eq!(validate_doap(&xml), Vec::<String>::new());
}

#[test]
fn reports_mismatched_tags() {
    let doc = VALID.replace("</foaf:name>", "</foaf:nom>");
    let errors = validate_doap(&doc);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("malformed XML"), "{errors:?}");
}

#[test]
fn reports_unclosed_root() {
    let doc = VALID.replace("</rdf:RDF>", "");
    assert!(!validate_doap(&doc).is_empty());
}

#[test]
fn reports_undeclared_prefix() {
    let doc = VALID.replace("<name>Widget</name>", "<dc:title>Widget</dc:title>");
    let errors = validate_doap(&doc);
    assert!(
        errors.iter().any(|e| e.contains("undeclared namespace prefix 'dc'")),
        "{errors:?}"
    );
}

#[test]
fn reports_wrong_root_and_missing_project() {
    let errors = validate_doap("<project><name>x</name></project>");
    assert!(errors.iter().any(|e| e.contains("expected <rdf:RDF>")), "{errors:?}");
    assert!(errors.iter().any(|e| e.contains("no DOAP <Project>")), "{errors:?}");
}

#[test]
fn reports_missing_project() {
    let doc = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/>"#;
    assert_eq!(validate_doap(doc), ["no DOAP <Project> element"]);
}

#[test]
fn reports_empty_input() {
    assert_eq!(validate_doap(""), ["missing <rdf:RDF> root element"]);
}
