//! # Console Application
//!
//! Owns the command tree, the I/O handle, and the dispatch pipeline:
//! route -> run -> translate failure. Handler errors are caught exactly once
//! here, rendered to the error stream, and converted to an exit code; nothing
//! below this level retries or reports.

use crate::observability::{Logger, Severity};

use super::command::{Command, CommandId, CommandTree, HandlerContext};
use super::config::ConsoleConfig;
use super::descriptor::{DescriptorHelper, TextDescriptor};
use super::errors::{ConsoleError, ConsoleResult, HandlerError};
use super::exit::{normalize_code, ExitRequester, ProcessExit};
use super::io::{ConsoleIo, StdIo};
use super::router::Resolution;

/// A console application: one instance per process invocation.
pub struct Console<I: ConsoleIo = StdIo> {
    config: ConsoleConfig,
    tree: CommandTree,
    io: I,
    descriptor: Box<dyn DescriptorHelper>,
    exit: Box<dyn ExitRequester>,
    logger: Logger,
}

impl<I: ConsoleIo> Console<I> {
    /// Create a console over the given I/O handle, with the built-in `help`
    /// command already registered under the root.
    pub fn new(io: I, config: ConsoleConfig) -> Self {
        let mut console = Self {
            tree: CommandTree::new(),
            io,
            descriptor: Box::new(TextDescriptor),
            exit: Box::new(ProcessExit),
            logger: Logger::new(Severity::Warn),
            config,
        };

        let root = console.tree.root();
        console
            .tree
            .set_description(root, console.config.description.clone());
        console.register_root_command();
        console
    }

    /// Register the default `help` child on the root command.
    fn register_root_command(&mut self) {
        let root = self.tree.root();
        let help = Command::new("help")
            .description("Describe a command")
            .handler(|ctx: HandlerContext<'_>| {
                // `help remote set` describes the deepest command the
                // arguments reach; bare `help` describes the root.
                let target = ctx.tree.resolve(ctx.args);
                let text = ctx.descriptor.describe(ctx.tree, target.command);
                ctx.io.out(&text);
                Ok(0)
            });

        self.tree.add_command(root, help);
    }

    /// Application name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Set the application name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.config.name = name.into();
        self
    }

    /// Application version.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Set the application version.
    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.config.version = version.into();
        self
    }

    /// Application description (held on the root command).
    pub fn description(&self) -> &str {
        self.tree.description(self.tree.root())
    }

    /// Set the application description.
    pub fn set_description(&mut self, text: impl Into<String>) -> &mut Self {
        let root = self.tree.root();
        self.tree.set_description(root, text);
        self
    }

    /// Install execution code on the root command itself.
    pub fn set_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(HandlerContext<'_>) -> Result<i32, HandlerError> + Send + Sync + 'static,
    {
        let root = self.tree.root();
        self.tree.set_handler(root, handler);
        self
    }

    /// Whether the console terminates the process after dispatch.
    pub fn auto_exit(&self) -> bool {
        self.config.auto_exit
    }

    /// Enable or disable auto-exit.
    pub fn set_auto_exit(&mut self, auto_exit: bool) -> &mut Self {
        self.config.auto_exit = auto_exit;
        self
    }

    /// Register an empty command under the root and return its id.
    pub fn register(&mut self, name: impl Into<String>) -> CommandId {
        let root = self.tree.root();
        self.tree.add_command(root, Command::new(name))
    }

    /// Add a command under the root. Same-name commands are replaced.
    pub fn add_command(&mut self, command: Command) -> CommandId {
        let root = self.tree.root();
        self.tree.add_command(root, command)
    }

    /// The command tree.
    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    /// The command tree, mutable (for nested registration).
    pub fn tree_mut(&mut self) -> &mut CommandTree {
        &mut self.tree
    }

    /// The I/O handle.
    pub fn io(&self) -> &I {
        &self.io
    }

    /// The application configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Replace the help renderer.
    pub fn set_descriptor(&mut self, descriptor: Box<dyn DescriptorHelper>) -> &mut Self {
        self.descriptor = descriptor;
        self
    }

    /// Replace the process-termination seam.
    pub fn set_exit_requester(&mut self, exit: Box<dyn ExitRequester>) -> &mut Self {
        self.exit = exit;
        self
    }

    /// Replace the logger.
    pub fn set_logger(&mut self, logger: Logger) -> &mut Self {
        self.logger = logger;
        self
    }

    /// Execute the application.
    ///
    /// Returns the normalized exit code, or never returns when auto-exit is
    /// enabled and the exit requester terminates the process.
    pub fn execute(&mut self) -> i32 {
        // A bare invocation with no root handler always produces usage
        // output instead of silently doing nothing.
        let root = self.tree.root();
        if self.tree.handler(root).is_none() && self.io.arguments().is_empty() {
            self.io.unshift_argument("help".to_string());
        }

        let tokens = self.io.arguments().to_vec();
        let resolution = self.tree.resolve(&tokens);
        let path = self.tree.path(resolution.command);
        let target = if path.is_empty() { "(root)" } else { path.as_str() };
        let arg_count = resolution.args.len().to_string();

        self.logger.trace(
            "COMMAND_DISPATCH",
            &[("args", arg_count.as_str()), ("command", target)],
        );

        let code = match self.dispatch(&resolution) {
            Ok(code) => code,
            Err(err) => {
                let rendered = err.to_string();
                self.io.error(&rendered);
                self.logger.error(
                    "COMMAND_FAILED",
                    &[("command", target), ("error", rendered.as_str())],
                );
                err.exit_code()
            }
        };

        let code = normalize_code(code);

        if self.config.auto_exit {
            // Irreversible; nothing may run after this.
            self.exit.request_exit(code);
        }

        code
    }

    /// Run the resolved command: its handler if present, otherwise usage
    /// output for a clean match or `CommandNotFound` for leftover tokens.
    fn dispatch(&mut self, resolution: &Resolution) -> ConsoleResult<i32> {
        if let Some(handler) = self.tree.handler(resolution.command) {
            let ctx = HandlerContext {
                tree: &self.tree,
                command: resolution.command,
                io: &mut self.io,
                descriptor: self.descriptor.as_ref(),
                args: &resolution.args,
            };
            return handler(ctx).map_err(ConsoleError::from);
        }

        if resolution.args.is_empty() {
            let text = self.descriptor.describe(&self.tree, resolution.command);
            self.io.out(&text);
            return Ok(0);
        }

        Err(ConsoleError::CommandNotFound(resolution.args[0].clone()))
    }
}
