//! Minimal CLI: JSON on stdin → C++ struct declaration on stdout.
use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::{CommandFactory, Parser};

/// infer a C++ struct declaration from a JSON document on stdin
#[derive(Parser, Debug)]
#[command(name = "json-decl")]
pub struct CommandLineInterface {
    /// the name of the root struct
    #[arg(long, default_value = "Foo")]
    name: String,

    /// the namespace for the generated code (accepted for flag
    /// compatibility, not consumed by generation)
    #[arg(long, default_value = "main")]
    pkg: String,
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            let mut usage = Self::command();
            eprintln!("{}", usage.render_help());
            anyhow::bail!("expects JSON input on stdin");
        }

        tracing::debug!(pkg = %self.pkg, "namespace flag accepted and ignored");

        let output = crate::generate::generate(stdin.lock(), &self.name)
            .context("failed to generate declaration")?;
        print!("{output}");
        Ok(())
    }
}
