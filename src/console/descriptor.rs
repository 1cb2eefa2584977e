//! Command description rendering.
//!
//! Help output is a collaborator concern: the console only ever calls
//! `describe` and writes the returned text. `TextDescriptor` is the plain
//! default; richer renderers implement the same trait.

use super::command::{CommandId, CommandTree};

/// Renders a command as human-readable help text.
pub trait DescriptorHelper {
    /// Describe a command, returning the rendered text.
    fn describe(&self, tree: &CommandTree, command: CommandId) -> String;
}

/// Minimal plain-text descriptor: usage line, description, child list.
#[derive(Debug, Default)]
pub struct TextDescriptor;

impl DescriptorHelper for TextDescriptor {
    fn describe(&self, tree: &CommandTree, command: CommandId) -> String {
        let mut text = String::new();
        let path = tree.path(command);

        if path.is_empty() {
            text.push_str("Usage: <command> [args...]\n");
        } else {
            text.push_str(&format!("Usage: {} [args...]\n", path));
        }

        let description = tree.description(command);
        if !description.is_empty() {
            text.push('\n');
            text.push_str(description);
            text.push('\n');
        }

        let children: Vec<_> = tree.children(command).collect();
        if !children.is_empty() {
            let width = children
                .iter()
                .map(|(name, _)| name.len())
                .max()
                .unwrap_or(0);

            text.push_str("\nCommands:\n");
            for (name, child) in children {
                text.push_str(&format!(
                    "  {:width$}  {}\n",
                    name,
                    tree.description(child),
                    width = width
                ));
            }
        }

        text
    }
}
