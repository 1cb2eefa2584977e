//! Token resolution against the command tree.

use super::command::{CommandId, CommandTree};

/// Result of resolving an argument vector: the deepest matched command and
/// the exact suffix of unconsumed tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub command: CommandId,
    pub args: Vec<String>,
}

impl CommandTree {
    /// Resolve from the root: consume leading tokens while each names a
    /// child of the current command, descending as far as possible.
    pub fn resolve(&self, tokens: &[String]) -> Resolution {
        self.resolve_from(self.root(), tokens)
    }

    /// Resolve starting at an arbitrary command.
    pub fn resolve_from(&self, start: CommandId, tokens: &[String]) -> Resolution {
        let mut current = start;
        let mut consumed = 0;

        while consumed < tokens.len() {
            match self.child(current, &tokens[consumed]) {
                Some(next) => {
                    current = next;
                    consumed += 1;
                }
                None => break,
            }
        }

        Resolution {
            command: current,
            args: tokens[consumed..].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::command::Command;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn sample_tree() -> (CommandTree, CommandId, CommandId) {
        let mut tree = CommandTree::new();
        let root = tree.root();
        let remote = tree.add_command(root, Command::new("remote"));
        let set = tree.add_command(remote, Command::new("set"));
        (tree, remote, set)
    }

    #[test]
    fn test_empty_tokens_resolve_to_root() {
        let (tree, _, _) = sample_tree();
        let resolution = tree.resolve(&[]);

        assert_eq!(resolution.command, tree.root());
        assert!(resolution.args.is_empty());
    }

    #[test]
    fn test_resolves_deepest_prefix() {
        let (tree, _, set) = sample_tree();
        let resolution = tree.resolve(&tokens(&["remote", "set", "origin", "url"]));

        assert_eq!(resolution.command, set);
        assert_eq!(resolution.args, tokens(&["origin", "url"]));
    }

    #[test]
    fn test_stops_at_first_non_matching_token() {
        let (tree, remote, _) = sample_tree();
        let resolution = tree.resolve(&tokens(&["remote", "get", "set"]));

        // "get" is not a child of remote, so "set" is never considered.
        assert_eq!(resolution.command, remote);
        assert_eq!(resolution.args, tokens(&["get", "set"]));
    }

    #[test]
    fn test_unknown_first_token_stays_at_root() {
        let (tree, _, _) = sample_tree();
        let resolution = tree.resolve(&tokens(&["frobnicate"]));

        assert_eq!(resolution.command, tree.root());
        assert_eq!(resolution.args, tokens(&["frobnicate"]));
    }

    #[test]
    fn test_exhausted_tokens_return_empty_suffix() {
        let (tree, _, set) = sample_tree();
        let resolution = tree.resolve(&tokens(&["remote", "set"]));

        assert_eq!(resolution.command, set);
        assert!(resolution.args.is_empty());
    }

    #[test]
    fn test_resolve_from_subcommand() {
        let (tree, remote, set) = sample_tree();
        let resolution = tree.resolve_from(remote, &tokens(&["set", "origin"]));

        assert_eq!(resolution.command, set);
        assert_eq!(resolution.args, tokens(&["origin"]));
    }
}
