use std::collections::BTreeMap;

use crate::expressions::{InvokeError, Method, Navigable, Shape, Value};
use crate::model::Contributor;

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "groupId")]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "artifactId")]
    pub artifact_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "inceptionYear")]
    pub inception_year: Option<String>,

    /// Programming language, written as `doap:programming-language`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<License>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub developers: Vec<Contributor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Contributor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<Scm>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "issueManagement")]
    pub issue_management: Option<IssueManagement>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl Project {
    pub fn is_snapshot(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(|v| v.ends_with("-SNAPSHOT"))
    }

    /// `groupId:artifactId:version`, with empty parts for missing coordinates.
    pub fn id(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group_id.as_deref().unwrap_or_default(),
            self.artifact_id.as_deref().unwrap_or_default(),
            self.version.as_deref().unwrap_or_default()
        )
    }
}

impl Navigable for Project {
    fn shape(&self) -> Shape {
        Shape::of::<Self>()
    }

    fn methods(&self) -> Vec<Method> {
        let mut methods = Method::getters(&[
            "getGroupId",
            "getArtifactId",
            "getVersion",
            "getId",
            "getName",
            "getDescription",
            "getUrl",
            "getInceptionYear",
            "getLanguage",
            "getLicenses",
            "getDevelopers",
            "getContributors",
            "getOrganization",
            "getScm",
            "getIssueManagement",
            "isSnapshot",
            "toString",
        ]);
        methods.push(Method::new("getProperty", 1));
        methods
    }

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError> {
        Ok(match method {
            "getGroupId" => self.group_id.as_deref().into(),
            "getArtifactId" => self.artifact_id.as_deref().into(),
            "getVersion" => self.version.as_deref().into(),
            "getId" => self.id().into(),
            "getName" => self.name.as_deref().into(),
            "getDescription" => self.description.as_deref().into(),
            "getUrl" => self.url.as_deref().into(),
            "getInceptionYear" => self.inception_year.as_deref().into(),
            "getLanguage" => self.language.as_deref().into(),
            "getLicenses" => Value::objects(&self.licenses),
            "getDevelopers" => Value::objects(&self.developers),
            "getContributors" => Value::objects(&self.contributors),
            "getOrganization" => Value::object(self.organization.as_ref()),
            "getScm" => Value::object(self.scm.as_ref()),
            "getIssueManagement" => Value::object(self.issue_management.as_ref()),
            "isSnapshot" => self.is_snapshot().into(),
            "toString" => self.display().into(),
            other => return Err(InvokeError::NoSuchMethod(other.to_string())),
        })
    }

    fn display(&self) -> String {
        format!("Project: {}", self.id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct License {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl Navigable for License {
    fn shape(&self) -> Shape {
        Shape::of::<Self>()
    }

    fn methods(&self) -> Vec<Method> {
        Method::getters(&["getName", "getUrl", "getComments"])
    }

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError> {
        Ok(match method {
            "getName" => self.name.as_deref().into(),
            "getUrl" => self.url.as_deref().into(),
            "getComments" => self.comments.as_deref().into(),
            other => return Err(InvokeError::NoSuchMethod(other.to_string())),
        })
    }

    fn display(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Navigable for Organization {
    fn shape(&self) -> Shape {
        Shape::of::<Self>()
    }

    fn methods(&self) -> Vec<Method> {
        Method::getters(&["getName", "getUrl"])
    }

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError> {
        Ok(match method {
            "getName" => self.name.as_deref().into(),
            "getUrl" => self.url.as_deref().into(),
            other => return Err(InvokeError::NoSuchMethod(other.to_string())),
        })
    }

    fn display(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "developerConnection")]
    pub developer_connection: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Navigable for Scm {
    fn shape(&self) -> Shape {
        Shape::of::<Self>()
    }

    fn methods(&self) -> Vec<Method> {
        Method::getters(&["getConnection", "getDeveloperConnection", "getUrl"])
    }

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError> {
        Ok(match method {
            "getConnection" => self.connection.as_deref().into(),
            "getDeveloperConnection" => self.developer_connection.as_deref().into(),
            "getUrl" => self.url.as_deref().into(),
            other => return Err(InvokeError::NoSuchMethod(other.to_string())),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IssueManagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Navigable for IssueManagement {
    fn shape(&self) -> Shape {
        Shape::of::<Self>()
    }

    fn methods(&self) -> Vec<Method> {
        Method::getters(&["getSystem", "getUrl"])
    }

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError> {
        Ok(match method {
            "getSystem" => self.system.as_deref().into(),
            "getUrl" => self.url.as_deref().into(),
            other => return Err(InvokeError::NoSuchMethod(other.to_string())),
        })
    }
}
