//! Prompt construction for the pattern classifier.

use std::fmt::Write;

use helpdesk_core::constants::MAX_ALTERNATIVE_GROUPS;
use helpdesk_core::Taxonomy;

/// Build the static system prompt listing every group's responsibilities
/// and examples, followed by the required reply shape.
pub fn build_system_prompt(taxonomy: &Taxonomy) -> String {
    let mut prompt = String::from(
        "You are an IT service desk dispatcher. Assign each support ticket to the \
         support group best placed to resolve it. Choose only from the groups below.\n",
    );

    for group in taxonomy.groups() {
        let _ = write!(
            prompt,
            "\n## {}\nResponsibilities: {}\nExamples:\n",
            group.name, group.responsibilities
        );
        for example in &group.examples {
            let _ = writeln!(prompt, "- {example}");
        }
    }

    let _ = write!(
        prompt,
        "\nReply with a single JSON object and nothing else:\n\
         {{\"primaryGroup\": {{\"name\": string, \"confidence\": integer 0-100, \"reasoning\": string}}, \
         \"alternativeGroups\": [{{\"name\": string, \"confidence\": integer 0-100, \"reasoning\": string}}]}}\n\
         Use group names exactly as written above. List at most {MAX_ALTERNATIVE_GROUPS} \
         alternative groups and never repeat the primary group among them."
    );
    prompt
}

/// Build the per-ticket user turn.
pub fn build_user_prompt(subject: &str, description: &str) -> String {
    format!(
        "Subject: {}\nDescription: {}",
        subject.trim(),
        description.trim()
    )
}
