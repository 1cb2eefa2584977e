//! # Command Tree
//!
//! Arena-backed tree of named commands. Nodes are addressed by opaque
//! `CommandId` handles; children own nothing, so parent back-references are
//! plain ids with no ownership cycle.

use std::collections::BTreeMap;
use std::fmt;

use super::descriptor::DescriptorHelper;
use super::errors::HandlerError;
use super::io::ConsoleIo;

/// Opaque handle to a node in the command arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(usize);

/// Everything a command handler gets to see during one dispatch.
pub struct HandlerContext<'a> {
    /// The full command tree, read-only.
    pub tree: &'a CommandTree,
    /// The resolved command being executed.
    pub command: CommandId,
    /// I/O for the current invocation.
    pub io: &'a mut dyn ConsoleIo,
    /// Help renderer collaborator.
    pub descriptor: &'a dyn DescriptorHelper,
    /// Tokens left over after resolution.
    pub args: &'a [String],
}

/// Command execution code: returns an exit code or a structured error.
pub type CommandHandler =
    Box<dyn Fn(HandlerContext<'_>) -> Result<i32, HandlerError> + Send + Sync>;

/// A command definition, built by the caller and handed to
/// `CommandTree::add_command` for insertion.
pub struct Command {
    name: String,
    description: String,
    handler: Option<CommandHandler>,
}

impl Command {
    /// Create a command with the given name and no handler.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            handler: None,
        }
    }

    /// Set the description shown by the descriptor.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Set the execution code.
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(HandlerContext<'_>) -> Result<i32, HandlerError> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

struct CommandNode {
    name: String,
    description: String,
    handler: Option<CommandHandler>,
    children: BTreeMap<String, CommandId>,
    parent: Option<CommandId>,
}

/// Arena of command nodes rooted at a single nameless root command.
///
/// Nodes live for the tree's lifetime. Replacing a child leaves the old
/// subtree in the arena but unreachable from the root.
pub struct CommandTree {
    nodes: Vec<CommandNode>,
    root: CommandId,
}

impl CommandTree {
    /// Create a tree holding only the root command.
    pub fn new() -> Self {
        let root = CommandNode {
            name: String::new(),
            description: String::new(),
            handler: None,
            children: BTreeMap::new(),
            parent: None,
        };

        Self {
            nodes: vec![root],
            root: CommandId(0),
        }
    }

    /// The root command.
    pub fn root(&self) -> CommandId {
        self.root
    }

    /// Insert `command` as a child of `parent`, keyed by its name.
    ///
    /// A child with the same name is replaced outright, never merged; the
    /// prior command (and its subtree) is no longer reachable at that path.
    pub fn add_command(&mut self, parent: CommandId, command: Command) -> CommandId {
        let id = CommandId(self.nodes.len());
        let name = command.name.clone();

        self.nodes.push(CommandNode {
            name: command.name,
            description: command.description,
            handler: command.handler,
            children: BTreeMap::new(),
            parent: Some(parent),
        });

        self.node_mut(parent).children.insert(name, id);

        id
    }

    /// Command name, empty for the root.
    pub fn name(&self, id: CommandId) -> &str {
        &self.node(id).name
    }

    /// Command description.
    pub fn description(&self, id: CommandId) -> &str {
        &self.node(id).description
    }

    /// Replace a command's description in place.
    pub fn set_description(&mut self, id: CommandId, text: impl Into<String>) {
        self.node_mut(id).description = text.into();
    }

    /// The command's handler, if it has one.
    pub fn handler(&self, id: CommandId) -> Option<&CommandHandler> {
        self.node(id).handler.as_ref()
    }

    /// Replace a command's handler in place.
    pub fn set_handler<F>(&mut self, id: CommandId, handler: F)
    where
        F: Fn(HandlerContext<'_>) -> Result<i32, HandlerError> + Send + Sync + 'static,
    {
        self.node_mut(id).handler = Some(Box::new(handler));
    }

    /// Look up a direct child by name.
    pub fn child(&self, id: CommandId, name: &str) -> Option<CommandId> {
        self.node(id).children.get(name).copied()
    }

    /// Direct children as (name, id) pairs, in name order.
    pub fn children(&self, id: CommandId) -> impl Iterator<Item = (&str, CommandId)> {
        self.node(id)
            .children
            .iter()
            .map(|(name, child)| (name.as_str(), *child))
    }

    /// Parent back-reference, `None` for the root.
    pub fn parent(&self, id: CommandId) -> Option<CommandId> {
        self.node(id).parent
    }

    /// Space-joined path from the root to this command, e.g. `"remote set"`.
    /// Empty for the root itself.
    pub fn path(&self, id: CommandId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);

        while let Some(node) = current {
            if !self.name(node).is_empty() {
                segments.push(self.name(node).to_string());
            }
            current = self.parent(node);
        }

        segments.reverse();
        segments.join(" ")
    }

    fn node(&self, id: CommandId) -> &CommandNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: CommandId) -> &mut CommandNode {
        &mut self.nodes[id.0]
    }
}

impl Default for CommandTree {
    fn default() -> Self {
        Self::new()
    }
}
