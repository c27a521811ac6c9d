use chrono::{TimeZone, Utc};
use doap_core::markup::{DoapWriter, MarkupError, RDF_NODE_ID, RDF_RESOURCE};

fn written(f: impl FnOnce(&mut DoapWriter<Vec<u8>>) -> Result<(), MarkupError>) -> String {
    let mut writer = DoapWriter::new(Vec::new());
    f(&mut writer).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn writes_simple_element() {
    let out = written(|w| w.write_element(None, "name", Some("value")));
    assert_eq!(out, "<name>value</name>");
}

#[test]
fn writes_rdf_resource_element() {
    let out = written(|w| w.write_rdf_resource_element(None, "name", Some("value")));
    assert_eq!(out, format!("<name {RDF_RESOURCE}=\"value\"/>"));
}

#[test]
fn writes_rdf_node_id_element_with_prefix() {
    let out = written(|w| w.write_rdf_node_id_element(Some("foaf"), "member", Some("b1")));
    assert_eq!(out, format!("<foaf:member {RDF_NODE_ID}=\"b1\"/>"));
}

#[test]
fn missing_value_writes_nothing() {
    let out = written(|w| {
        w.write_element(None, "name", None)?;
        w.write_rdf_resource_element(None, "homepage", None)
    });
    assert_eq!(out, "");
}

#[test]
fn empty_name_is_rejected_even_without_value() {
    let mut writer = DoapWriter::new(Vec::new());
    assert_eq!(
        writer.write_element(None, "", Some("value")),
        Err(MarkupError::MissingName)
    );
    assert_eq!(
        writer.write_element(None, "", None),
        Err(MarkupError::MissingName)
    );
    assert_eq!(
        writer.write_rdf_resource_element(None, "", Some("value")),
        Err(MarkupError::MissingName)
    );
}

#[test]
fn element_text_is_escaped() {
    let out = written(|w| w.write_element(None, "description", Some("a < b & c")));
    assert_eq!(out, "<description>a &lt; b &amp; c</description>");
}

#[test]
fn language_attribute_is_written_when_given() {
    let out = written(|w| w.write_element_lang(None, "name", Some("valeur"), Some("fr")));
    assert_eq!(out, "<name xml:lang=\"fr\">valeur</name>");
    let out = written(|w| w.write_element_lang(None, "name", Some("value"), Some("")));
    assert_eq!(out, "<name>value</name>");
}

#[test]
fn start_and_end_elements_nest() {
    let out = written(|w| {
        w.write_start_element(None, "Project")?;
        w.write_start_element_with(Some("foaf"), "Person", &[("rdf:nodeID", "b1")])?;
        w.write_end_element()?;
        w.write_end_element()
    });
    assert_eq!(
        out,
        "<Project><foaf:Person rdf:nodeID=\"b1\"></foaf:Person></Project>"
    );
}

#[test]
fn end_without_start_is_an_error() {
    let mut writer = DoapWriter::new(Vec::new());
    assert_eq!(writer.write_end_element(), Err(MarkupError::NothingOpen));
}

#[test]
fn comments_cannot_contain_double_dash() {
    let out = written(|w| w.write_comment("a -- b"));
    assert_eq!(out, "<!-- a - - b -->");
    let mut writer = DoapWriter::new(Vec::new());
    assert_eq!(writer.write_comment(""), Err(MarkupError::MissingComment));
}

#[test]
fn header_is_a_do_not_edit_banner() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    let out = written(|w| w.write_header(at));
    assert!(out.contains("DO NOT EDIT THIS FILE!"));
    assert!(out.contains("2024-03-01 12:30 UTC"));
}

fn comment_body(out: &str) -> &str {
    out.strip_prefix("<!--")
        .and_then(|s| s.strip_suffix("-->"))
        .unwrap()
}

#[test]
fn dash_runs_and_trailing_dash_are_broken_up() {
    for comment in ["a---b", "x-", "----", "-a-"] {
        let out = written(|w| w.write_comment(comment));
        let body = comment_body(&out);
        assert!(!body.contains("--"), "{comment:?} wrote {out:?}");
        assert!(!body.ends_with('-'), "{comment:?} wrote {out:?}");
    }
    let out = written(|w| w.write_comment("a---b"));
    assert_eq!(out, "<!-- a- - -b -->");
}
