use super::PromptFragments;

const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Merge persona and guard into the system instruction.
///
/// The guard always comes last so persona text cannot override it. Empty
/// fragments are dropped, so a missing persona yields the guard alone and two
/// missing fragments yield an empty instruction.
pub fn build_system_instruction(fragments: &PromptFragments) -> String {
    [fragments.persona.as_str(), fragments.guard.as_str()]
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}
