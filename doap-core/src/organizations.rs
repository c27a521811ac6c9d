use std::collections::BTreeMap;

/// An organization that people in the document belong to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RegisteredOrganization {
    pub name: String,
    pub url: Option<String>,
    /// RDF node ids of the members.
    pub members: Vec<String>,
}

impl RegisteredOrganization {
    pub fn add_member(&mut self, node_id: impl Into<String>) {
        self.members.push(node_id.into());
    }
}

/// Organizations and RDF blank node ids for one DOAP document.
#[derive(Debug, Clone)]
pub struct OrganizationRegistry {
    organizations: BTreeMap<String, RegisteredOrganization>,
    next_node: u32,
}

impl Default for OrganizationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizationRegistry {
    pub fn new() -> Self {
        Self {
            organizations: BTreeMap::new(),
            next_node: 1,
        }
    }

    /// Register an organization by name. A duplicate name returns the existing entry
    /// unchanged.
    pub fn add_organization(&mut self, name: &str, url: Option<&str>) -> &mut RegisteredOrganization {
        self.organizations
            .entry(name.to_string())
            .or_insert_with(|| RegisteredOrganization {
                name: name.to_string(),
                url: url.map(str::to_string),
                members: Vec::new(),
            })
    }

    /// Next unique blank node id: `b1`, `b2`, ...
    pub fn node_id(&mut self) -> String {
        let id = format!("b{}", self.next_node);
        self.next_node += 1;
        id
    }

    pub fn organizations(&self) -> impl Iterator<Item = &RegisteredOrganization> {
        self.organizations.values()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}
