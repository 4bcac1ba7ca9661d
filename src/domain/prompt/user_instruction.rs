use crate::domain::ProjectContext;

const ROLE: &str = "Senior QA Lead with expertise in test planning";
const INTENT: &str = "Generate a comprehensive test plan for the given application.";
const TASK: &str = "Generate the complete test plan now.";

const PARAMETERS: [&str; 5] = [
    "Follow IEEE 829 standard structure.",
    "Include risk assessment.",
    "Cover functional and non-functional testing.",
    "Add entry/exit criteria.",
    "Define test levels.",
];

const OUTPUT_FORMAT_HEADER: &str = "Output Format (STRICT as per Anti-Hallucination Guard):";
const OUTPUT_SECTIONS: [&str; 4] = [
    "Verified Facts",
    "Missing / Unknown Information",
    "Generated Output (The Test Plan Markdown)",
    "Self-Validation Check",
];

/// Render the user instruction for a project.
///
/// Sections appear in fixed order: Role, Intent, Context, Parameters,
/// Output Format, Task. Every context field is rendered, unset ones as the
/// `N/A` sentinel. Output depends on `context` only.
pub fn build_user_instruction(context: &ProjectContext) -> String {
    let mut out = String::from("\n");

    out.push_str(&format!("Role: {}\n\n", ROLE));
    out.push_str(&format!("Intent: {}\n\n", INTENT));

    out.push_str("Context:\n");
    for (field, value) in context.entries() {
        out.push_str(&format!("- {}: {}\n", field.label(), value));
    }
    out.push('\n');

    out.push_str("Parameters:\n");
    push_bullets(&mut out, &PARAMETERS);
    out.push('\n');

    out.push_str(OUTPUT_FORMAT_HEADER);
    out.push('\n');
    push_bullets(&mut out, &OUTPUT_SECTIONS);
    out.push('\n');

    out.push_str(&format!("Task: {}\n", TASK));
    out
}

fn push_bullets(out: &mut String, items: &[&str]) {
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
}
