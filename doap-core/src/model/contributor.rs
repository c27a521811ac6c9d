use crate::expressions::{InvokeError, Method, Navigable, Shape, Value};

/// A developer or contributor listed in the project metadata.
///
/// Developers carry an `id`; plain contributors usually don't.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Contributor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "organizationUrl")]
    pub organization_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Contributor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }
}

impl Navigable for Contributor {
    fn shape(&self) -> Shape {
        Shape::of::<Self>()
    }

    fn methods(&self) -> Vec<Method> {
        Method::getters(&[
            "getId",
            "getName",
            "getEmail",
            "getUrl",
            "getOrganization",
            "getOrganizationUrl",
            "getRoles",
            "getTimezone",
        ])
    }

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError> {
        Ok(match method {
            "getId" => self.id.as_deref().into(),
            "getName" => self.name.as_deref().into(),
            "getEmail" => self.email.as_deref().into(),
            "getUrl" => self.url.as_deref().into(),
            "getOrganization" => self.organization.as_deref().into(),
            "getOrganizationUrl" => self.organization_url.as_deref().into(),
            "getRoles" => Value::strings(&self.roles),
            "getTimezone" => self.timezone.as_deref().into(),
            other => return Err(InvokeError::NoSuchMethod(other.to_string())),
        })
    }

    fn display(&self) -> String {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}
