use std::collections::BTreeMap;

use doap_core::model::Contributor;
use doap_core::{filter_by_doap_roles, DoapRole};
use serde::Serialize;

use super::load_inputs;
use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{OutputArgs, ProjectArgs};

#[derive(Serialize)]
struct RolesResult {
    developers: BTreeMap<DoapRole, Vec<String>>,
    contributors: BTreeMap<DoapRole, Vec<String>>,
}

pub fn roles_cmd(project: ProjectArgs, output: OutputArgs) -> i32 {
    let (project, _) = match load_inputs(&project, &output) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let result = RolesResult {
        developers: grouped(&project.developers),
        contributors: grouped(&project.contributors),
    };

    if output.format == OutputFormat::Text && !output.quiet {
        print_section("developers", &result.developers);
        print_section("contributors", &result.contributors);
    } else {
        print_result(output.format, output.quiet, &result);
    }
    exit_codes::SUCCESS
}

fn grouped(people: &[Contributor]) -> BTreeMap<DoapRole, Vec<String>> {
    let groups = filter_by_doap_roles(people);
    DoapRole::ALL
        .into_iter()
        .filter_map(|role| {
            let names: Vec<String> = groups.get(role).iter().map(|c| label(c)).collect();
            (!names.is_empty()).then_some((role, names))
        })
        .collect()
}

fn label(contributor: &Contributor) -> String {
    contributor
        .name
        .clone()
        .or_else(|| contributor.id.clone())
        .unwrap_or_else(|| "(unnamed)".to_string())
}

fn print_section(title: &str, groups: &BTreeMap<DoapRole, Vec<String>>) {
    println!("{title}:");
    for (role, names) in groups {
        println!("  {}: {}", role.as_str(), names.join(", "));
    }
}
