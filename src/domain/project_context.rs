//! Project metadata interpolated into the user instruction.

use std::collections::BTreeMap;

/// Rendered in place of any field that was not supplied.
pub const NOT_AVAILABLE: &str = "N/A";

/// Named fields of a project context, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContextField {
    ProjectName,
    AppType,
    Features,
    TechStack,
    TeamSize,
    Timeline,
    Environment,
}

impl ContextField {
    /// All fields in the order they appear in the template.
    pub const ALL: [ContextField; 7] = [
        ContextField::ProjectName,
        ContextField::AppType,
        ContextField::Features,
        ContextField::TechStack,
        ContextField::TeamSize,
        ContextField::Timeline,
        ContextField::Environment,
    ];

    /// Fixed label used in the Context section.
    pub fn label(&self) -> &'static str {
        match self {
            ContextField::ProjectName => "Project",
            ContextField::AppType => "Application Type",
            ContextField::Features => "Features in Scope",
            ContextField::TechStack => "Tech Stack",
            ContextField::TeamSize => "Team Size",
            ContextField::Timeline => "Timeline",
            ContextField::Environment => "Environment",
        }
    }
}

/// Immutable set of project metadata values.
///
/// Every field always has a value: unset fields read as [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectContext {
    values: BTreeMap<ContextField, String>,
}

impl ProjectContext {
    /// Create a context with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn with(mut self, field: ContextField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Value of a field, or the sentinel when unset.
    pub fn get(&self, field: ContextField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or(NOT_AVAILABLE)
    }

    /// Iterate `(field, value)` pairs in render order.
    pub fn entries(&self) -> impl Iterator<Item = (ContextField, &str)> + '_ {
        ContextField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_read_as_sentinel() {
        let ctx = ProjectContext::new().with(ContextField::ProjectName, "Acme");

        assert_eq!(ctx.get(ContextField::ProjectName), "Acme");
        assert_eq!(ctx.get(ContextField::Timeline), NOT_AVAILABLE);
    }

    #[test]
    fn entries_follow_fixed_order_regardless_of_insertion() {
        let ctx = ProjectContext::new()
            .with(ContextField::Environment, "Prod")
            .with(ContextField::ProjectName, "Acme");

        let fields: Vec<_> = ctx.entries().map(|(field, _)| field).collect();
        assert_eq!(fields, ContextField::ALL.to_vec());
    }

    #[test]
    fn later_value_replaces_earlier_one() {
        let ctx = ProjectContext::new()
            .with(ContextField::TeamSize, "3")
            .with(ContextField::TeamSize, "5");
        assert_eq!(ctx.get(ContextField::TeamSize), "5");
    }
}
