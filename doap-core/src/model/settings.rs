use crate::expressions::{InvokeError, Method, Navigable, Shape, Value};

/// User-level build settings, reachable from interpolated text as `settings.*`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "localRepository")]
    pub local_repository: Option<String>,

    #[serde(default)]
    pub offline: bool,

    #[serde(default = "default_interactive")]
    #[serde(rename = "interactiveMode")]
    pub interactive_mode: bool,
}

fn default_interactive() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            local_repository: None,
            offline: false,
            interactive_mode: default_interactive(),
        }
    }
}

impl Navigable for Settings {
    fn shape(&self) -> Shape {
        Shape::of::<Self>()
    }

    fn methods(&self) -> Vec<Method> {
        Method::getters(&["getLocalRepository", "isOffline", "isInteractiveMode"])
    }

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError> {
        Ok(match method {
            "getLocalRepository" => self.local_repository.as_deref().into(),
            "isOffline" => self.offline.into(),
            "isInteractiveMode" => self.interactive_mode.into(),
            other => return Err(InvokeError::NoSuchMethod(other.to_string())),
        })
    }
}
