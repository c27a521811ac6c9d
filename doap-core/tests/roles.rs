use doap_core::model::Contributor;
use doap_core::{filter_by_doap_roles, DoapRole};

fn dev(roles: &[&str]) -> Contributor {
    let mut dev = Contributor {
        id: Some("dev1".to_string()),
        ..Default::default()
    };
    dev.roles = roles.iter().map(|r| r.to_string()).collect();
    dev
}

#[test]
fn single_maintainer() {
    let people = vec![dev(&["maintainer"])];
    let groups = filter_by_doap_roles(&people);
    assert!(groups.developers().is_empty());
    assert!(groups.documenters().is_empty());
    assert!(groups.helpers().is_empty());
    assert!(!groups.maintainers().is_empty());
    assert!(groups.testers().is_empty());
    assert!(groups.translators().is_empty());
    assert!(groups.unknowns().is_empty());
}

#[test]
fn roles_match_case_insensitively_by_substring() {
    let people = vec![dev(&[" MAINTAINER", "tesTER ", "blabla", "translato r"])];
    let groups = filter_by_doap_roles(&people);
    assert!(groups.developers().is_empty());
    assert!(groups.documenters().is_empty());
    assert!(groups.helpers().is_empty());
    assert!(!groups.maintainers().is_empty());
    assert!(!groups.testers().is_empty());
    assert!(groups.translators().is_empty());
    assert!(!groups.unknowns().is_empty());
}

#[test]
fn each_contributor_appears_once_per_group() {
    let people = vec![dev(&["blabla", "other", "maintainer", "lead maintainer"])];
    let groups = filter_by_doap_roles(&people);
    assert_eq!(groups.unknowns().len(), 1);
    assert_eq!(groups.maintainers().len(), 1);
}

#[test]
fn emeritus_roles_are_ignored() {
    let before = vec![dev(&["maintainer", "unknown"])];
    let size_before = filter_by_doap_roles(&before).unknowns().len();

    let after = vec![dev(&["maintainer", "unknown", " Emeritus"])];
    assert_eq!(filter_by_doap_roles(&after).unknowns().len(), size_before);
}

#[test]
fn contributors_without_roles_are_unknown() {
    let people = vec![Contributor::named("Anon")];
    let groups = filter_by_doap_roles(&people);
    assert_eq!(groups.get(DoapRole::Unknown).len(), 1);
}

#[test]
fn group_order_follows_input() {
    let people = vec![
        Contributor::named("first").with_role("developer"),
        Contributor::named("second").with_role("Core Developer"),
    ];
    let groups = filter_by_doap_roles(&people);
    let names: Vec<_> = groups
        .developers()
        .iter()
        .filter_map(|c| c.name.as_deref())
        .collect();
    assert_eq!(names, ["first", "second"]);
}
