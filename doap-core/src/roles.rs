use std::collections::BTreeMap;

use crate::model::Contributor;

/// Roles a person can hold in a DOAP document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoapRole {
    Maintainer,
    Developer,
    Documenter,
    Translator,
    Tester,
    Helper,
    Unknown,
}

impl DoapRole {
    pub const ALL: [DoapRole; 7] = [
        DoapRole::Maintainer,
        DoapRole::Developer,
        DoapRole::Documenter,
        DoapRole::Translator,
        DoapRole::Tester,
        DoapRole::Helper,
        DoapRole::Unknown,
    ];

    /// DOAP property name, e.g. `maintainer`.
    pub fn as_str(self) -> &'static str {
        match self {
            DoapRole::Maintainer => "maintainer",
            DoapRole::Developer => "developer",
            DoapRole::Documenter => "documenter",
            DoapRole::Translator => "translator",
            DoapRole::Tester => "tester",
            DoapRole::Helper => "helper",
            DoapRole::Unknown => "unknown",
        }
    }
}

const EMERITUS: &str = "emeritus";

// Checked in this order; the first keyword contained in the role wins.
const KEYWORDS: [DoapRole; 6] = [
    DoapRole::Maintainer,
    DoapRole::Developer,
    DoapRole::Documenter,
    DoapRole::Translator,
    DoapRole::Tester,
    DoapRole::Helper,
];

fn classify(role: &str) -> Option<DoapRole> {
    let role = role.to_lowercase();
    if let Some(found) = KEYWORDS.iter().find(|k| role.contains(k.as_str())) {
        return Some(*found);
    }
    if role.contains(EMERITUS) {
        return None;
    }
    Some(DoapRole::Unknown)
}

/// Contributors grouped by DOAP role. A contributor appears at most once per group.
#[derive(Debug, Clone, Default)]
pub struct RoleGroups<'a> {
    groups: BTreeMap<DoapRole, Vec<&'a Contributor>>,
}

impl<'a> RoleGroups<'a> {
    pub fn get(&self, role: DoapRole) -> &[&'a Contributor] {
        self.groups.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn maintainers(&self) -> &[&'a Contributor] {
        self.get(DoapRole::Maintainer)
    }

    pub fn developers(&self) -> &[&'a Contributor] {
        self.get(DoapRole::Developer)
    }

    pub fn documenters(&self) -> &[&'a Contributor] {
        self.get(DoapRole::Documenter)
    }

    pub fn translators(&self) -> &[&'a Contributor] {
        self.get(DoapRole::Translator)
    }

    pub fn testers(&self) -> &[&'a Contributor] {
        self.get(DoapRole::Tester)
    }

    pub fn helpers(&self) -> &[&'a Contributor] {
        self.get(DoapRole::Helper)
    }

    pub fn unknowns(&self) -> &[&'a Contributor] {
        self.get(DoapRole::Unknown)
    }

    fn add(&mut self, role: DoapRole, contributor: &'a Contributor) {
        let group = self.groups.entry(role).or_default();
        if !group.iter().any(|c| std::ptr::eq(*c, contributor)) {
            group.push(contributor);
        }
    }
}

/// Sort contributors into DOAP role groups by matching their free-text roles.
///
/// Matching is case-insensitive and by substring, so ` MAINTAINER` counts as a
/// maintainer. Emeritus roles are skipped; unrecognised roles, or no roles at all,
/// land in [`DoapRole::Unknown`].
pub fn filter_by_doap_roles(contributors: &[Contributor]) -> RoleGroups<'_> {
    let mut groups = RoleGroups::default();
    for contributor in contributors {
        if contributor.roles.is_empty() {
            groups.add(DoapRole::Unknown, contributor);
            continue;
        }
        for role in &contributor.roles {
            if let Some(doap_role) = classify(role) {
                groups.add(doap_role, contributor);
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive_substring() {
        assert_eq!(classify(" MAINTAINER"), Some(DoapRole::Maintainer));
        assert_eq!(classify("tesTER "), Some(DoapRole::Tester));
        assert_eq!(classify("lead developer"), Some(DoapRole::Developer));
        assert_eq!(classify("translato r"), Some(DoapRole::Unknown));
        assert_eq!(classify(" Emeritus"), None);
    }
}
