//! System instruction templates
//!
//! Templates are embedded at compile time and rendered with simple
//! placeholder substitution. The structured template additionally gets the
//! capability catalogue appended, since that protocol describes tools in
//! prose rather than through the provider API.

use crate::parser::FINAL_ANSWER;

const NATIVE_TEMPLATE: &str = include_str!("native_agent.md");
const STRUCTURED_TEMPLATE: &str = include_str!("structured_agent.md");

/// Render the system instructions for the native tool-call protocol
pub fn native_instructions(name: &str, system: &str) -> String {
    substitute(NATIVE_TEMPLATE, name, system)
}

/// Render the system instructions for the structured protocol
///
/// `catalogue` is the registry's markdown tool listing.
pub fn structured_instructions(name: &str, system: &str, catalogue: &str) -> String {
    let mut rendered = substitute(STRUCTURED_TEMPLATE, name, system);
    rendered.push('\n');
    rendered.push_str(catalogue);
    rendered
}

fn substitute(template: &str, name: &str, system: &str) -> String {
    template
        .replace("{{time}}", &chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
        .replace("{{name}}", name)
        .replace("{{system}}", system)
        .replace("{{FINAL_ANSWER}}", FINAL_ANSWER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_placeholders_are_filled() {
        let rendered = native_instructions("helper", "You summarize logs.");

        assert!(rendered.contains("You are helper"));
        assert!(rendered.contains("You summarize logs."));
        assert!(rendered.contains(FINAL_ANSWER));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_structured_appends_catalogue() {
        let rendered =
            structured_instructions("helper", "You summarize logs.", "## Available Tools:\n");

        assert!(rendered.contains("You are helper"));
        assert!(rendered.ends_with("## Available Tools:\n"));
        assert!(!rendered.contains("{{"));
    }
}
