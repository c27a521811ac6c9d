use chrono::{DateTime, Utc};

use crate::interpolation::{finish, project_interpolator, Interpolator};
use crate::markup::{DoapWriter, MarkupError, DOAP_NS, FOAF_NS, RDF_NS};
use crate::model::{Contributor, Project, Settings};
use crate::organizations::OrganizationRegistry;
use crate::roles::{filter_by_doap_roles, DoapRole};
use crate::validate::is_valid_email;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Markup(#[from] MarkupError),
    #[error("rendered document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub generated_at: DateTime<Utc>,
    /// `xml:lang` of the document.
    pub lang: String,
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            generated_at: Utc::now(),
            lang: "en".to_string(),
            header: true,
        }
    }
}

/// Render the project as a DOAP RDF/XML document.
///
/// Every text value is interpolated first; values whose placeholders can't be
/// resolved are left out.
pub fn render_doap(
    project: &Project,
    settings: Option<&Settings>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut r = Renderer {
        out: DoapWriter::pretty(Vec::new()),
        interpolator: project_interpolator(project, settings, None),
        registry: OrganizationRegistry::new(),
    };

    r.out.write_declaration()?;
    if options.header {
        r.out.write_header(options.generated_at)?;
    }
    r.out.write_start_element_with(
        Some("rdf"),
        "RDF",
        &[
            ("xml:lang", options.lang.as_str()),
            ("xmlns", DOAP_NS),
            ("xmlns:rdf", RDF_NS),
            ("xmlns:foaf", FOAF_NS),
        ],
    )?;

    r.write_project(project)?;
    r.write_organizations()?;

    r.out.write_end_element()?;
    Ok(String::from_utf8(r.out.into_inner())?)
}

struct Renderer<'a> {
    out: DoapWriter<Vec<u8>>,
    interpolator: Interpolator<'a>,
    registry: OrganizationRegistry,
}

impl Renderer<'_> {
    fn text(&mut self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| finish(&mut self.interpolator, v))
    }

    fn write_project(&mut self, project: &Project) -> Result<(), MarkupError> {
        let about = self.text(project.url.as_deref());
        match &about {
            Some(url) => self
                .out
                .write_start_element_with(None, "Project", &[("rdf:about", url.as_str())])?,
            None => self.out.write_start_element(None, "Project")?,
        }

        let name = self.text(project.name.as_deref());
        self.out.write_element(None, "name", name.as_deref())?;

        let description = self.text(project.description.as_deref());
        let shortdesc = description.as_deref().map(first_sentence);
        self.out.write_element(None, "shortdesc", shortdesc)?;
        self.out.write_element(None, "description", description.as_deref())?;

        let created = self
            .text(project.inception_year.as_deref())
            .map(|year| format!("{year}-01-01"));
        self.out.write_element(None, "created", created.as_deref())?;

        self.out.write_rdf_resource_element(None, "homepage", about.as_deref())?;

        for license in &project.licenses {
            let url = self.text(license.url.as_deref());
            self.out.write_rdf_resource_element(None, "license", url.as_deref())?;
        }

        let language = self.text(project.language.as_deref());
        self.out.write_element(None, "programming-language", language.as_deref())?;

        if let Some(issues) = &project.issue_management {
            let url = self.text(issues.url.as_deref());
            self.out.write_rdf_resource_element(None, "bug-database", url.as_deref())?;
        }

        self.write_repository(project)?;
        self.write_people(project)?;

        self.out.write_end_element()
    }

    fn write_repository(&mut self, project: &Project) -> Result<(), MarkupError> {
        let Some(scm) = &project.scm else {
            return Ok(());
        };
        let connection = scm
            .developer_connection
            .as_deref()
            .or(scm.connection.as_deref());
        let Some(connection) = self.text(connection) else {
            return Ok(());
        };

        let (kind, location) = if let Some(loc) = connection.strip_prefix("scm:git:") {
            ("GitRepository", loc.to_string())
        } else if let Some(loc) = connection.strip_prefix("scm:svn:") {
            ("SVNRepository", loc.to_string())
        } else {
            return Ok(());
        };
        let browse = self.text(scm.url.as_deref());

        self.out.write_start_element(None, "repository")?;
        self.out.write_start_element(None, kind)?;
        self.out.write_rdf_resource_element(None, "location", Some(location.as_str()))?;
        self.out.write_rdf_resource_element(None, "browse", browse.as_deref())?;
        self.out.write_end_element()?;
        self.out.write_end_element()
    }

    fn write_people(&mut self, project: &Project) -> Result<(), MarkupError> {
        let developers = filter_by_doap_roles(&project.developers);
        let contributors = filter_by_doap_roles(&project.contributors);

        for role in DoapRole::ALL {
            if role == DoapRole::Unknown {
                continue;
            }
            for person in developers.get(role).iter().chain(contributors.get(role)) {
                self.write_person(role, person)?;
            }
        }

        // Developers without a recognised role still develop; contributors help.
        for person in developers.unknowns() {
            self.write_person(DoapRole::Developer, person)?;
        }
        for person in contributors.unknowns() {
            self.write_person(DoapRole::Helper, person)?;
        }
        Ok(())
    }

    fn write_person(&mut self, role: DoapRole, person: &Contributor) -> Result<(), MarkupError> {
        let Some(name) = self.text(person.name.as_deref().or(person.id.as_deref())) else {
            return Ok(());
        };
        let node_id = self.registry.node_id();

        if let Some(org) = self.text(person.organization.as_deref()) {
            let org_url = self.text(person.organization_url.as_deref());
            self.registry
                .add_organization(&org, org_url.as_deref())
                .add_member(node_id.clone());
        }

        self.out.write_start_element(None, role.as_str())?;
        self.out.write_start_element_with(
            Some("foaf"),
            "Person",
            &[("rdf:nodeID", node_id.as_str())],
        )?;
        self.out.write_element(Some("foaf"), "name", Some(name.as_str()))?;
        let mbox = self
            .text(person.email.as_deref())
            .filter(|email| is_valid_email(email))
            .map(|email| format!("mailto:{email}"));
        self.out.write_rdf_resource_element(Some("foaf"), "mbox", mbox.as_deref())?;
        let homepage = self.text(person.url.as_deref());
        self.out.write_rdf_resource_element(Some("foaf"), "homepage", homepage.as_deref())?;
        self.out.write_end_element()?;
        self.out.write_end_element()
    }

    fn write_organizations(&mut self) -> Result<(), MarkupError> {
        let organizations: Vec<_> = self.registry.organizations().cloned().collect();
        for org in organizations {
            self.out.write_start_element(Some("foaf"), "Organization")?;
            self.out.write_element(Some("foaf"), "name", Some(org.name.as_str()))?;
            self.out.write_rdf_resource_element(Some("foaf"), "homepage", org.url.as_deref())?;
            for member in &org.members {
                self.out.write_rdf_node_id_element(Some("foaf"), "member", Some(member.as_str()))?;
            }
            self.out.write_end_element()?;
        }
        Ok(())
    }
}

fn first_sentence(text: &str) -> &str {
    match text.find(". ") {
        Some(end) => &text[..=end],
        None => text,
    }
}
