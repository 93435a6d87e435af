//! Placeholder substitution.

use std::collections::HashMap;

use regex::{Captures, Regex};

/// Parameters available to a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParams {
    /// Substituted wherever a template references `project_name`.
    pub project_name: String,
}

impl RenderParams {
    /// Parameters for a project called `project_name`.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    /// Variable map seen by the renderer, including derived case variants.
    pub fn variables(&self) -> HashMap<String, String> {
        let name = &self.project_name;
        HashMap::from([
            ("project_name".to_string(), name.clone()),
            ("project_name_snake".to_string(), to_snake_case(name)),
            ("project_name_kebab".to_string(), to_kebab_case(name)),
            ("project_name_pascal".to_string(), to_pascal_case(name)),
        ])
    }
}

/// Renders `{{ variable }}` placeholders.
pub struct TemplateRenderer {
    variable_pattern: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a renderer for `{{name}}` and `{{ name }}` placeholders.
    pub fn new() -> Self {
        Self {
            variable_pattern: Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}")
                .expect("placeholder pattern is valid"),
        }
    }

    /// Replace every known placeholder. Unknown ones are left verbatim.
    pub fn render_content(&self, content: &str, variables: &HashMap<String, String>) -> String {
        self.variable_pattern
            .replace_all(content, |caps: &Captures| match variables.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

fn to_snake_case(s: &str) -> String {
    separate(s, '_')
}

fn to_kebab_case(s: &str) -> String {
    separate(s, '-')
}

fn separate(s: &str, sep: char) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !result.ends_with(sep) {
                result.push(sep);
            }
            result.extend(c.to_lowercase());
        } else if matches!(c, '-' | '_' | ' ') {
            result.push(sep);
        } else {
            result.push(c);
        }
    }
    result
}

fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}
