//! Single-entity build commands.

use anyhow::{Context, Result};
use clap::Parser;

use super::Project;

/// Build one entity by slug
#[derive(Parser)]
pub struct Entity {
    /// Entity slug (e.g., firefly, commonRustySword, fireball)
    #[arg(value_name = "SLUG")]
    slug: String,
}

impl Entity {
    pub fn enemy(self, project: &Project) -> Result<()> {
        let mut compiler = project.compiler()?;
        compiler
            .build_enemy(&self.slug)
            .with_context(|| format!("Failed to build enemy '{}'", self.slug))?;
        report(&mut compiler)
    }

    pub fn weapon(self, project: &Project) -> Result<()> {
        let mut compiler = project.compiler()?;
        compiler
            .build_weapon(&self.slug)
            .with_context(|| format!("Failed to build weapon '{}'", self.slug))?;
        report(&mut compiler)
    }

    pub fn skill(self, project: &Project) -> Result<()> {
        let mut compiler = project.compiler()?;
        compiler
            .build_skill(&self.slug)
            .with_context(|| format!("Failed to build skill '{}'", self.slug))?;
        report(&mut compiler)
    }
}

fn report(compiler: &mut balance_compiler::Compiler<'_>) -> Result<()> {
    compiler
        .update_manifest()
        .context("Failed to update manifest")?;
    for (dataset, digest) in compiler.manifest() {
        println!("{}  {}", &digest[..12], dataset);
    }
    Ok(())
}
