#![forbid(unsafe_code)]

//! Project metadata, `${...}` interpolation over it, and DOAP RDF/XML output.

pub mod error;
pub mod expressions;
pub mod interpolation;
pub mod markup;
pub mod model;
pub mod organizations;
pub mod parser;
pub mod render;
pub mod roles;
pub mod validate;

pub use crate::error::{DoapError, EvalError, ParseError};
pub use crate::expressions::{evaluate, parse_path, Navigable, Navigator, Value};
pub use crate::interpolation::{interpolate, project_interpolator, Interpolator};
pub use crate::model::{Contributor, License, Project, Record, Settings};
pub use crate::parser::{
    parse_project_str, parse_record_str, parse_settings_str, DocumentFormat, Parsed,
};
pub use crate::render::{render_doap, RenderOptions};
pub use crate::roles::{filter_by_doap_roles, DoapRole, RoleGroups};
pub use crate::validate::{is_valid_email, validate_doap};
