//! Whole-catalog build commands.

use anyhow::{Context, Result};

use super::Project;

/// Datasets built without naming an entity.
#[derive(Clone, Copy, Debug)]
pub enum Dataset {
    All,
    Attributes,
    Items,
    Quests,
    Requirements,
    Player,
}

impl Dataset {
    pub fn execute(self, project: &Project) -> Result<()> {
        let mut compiler = project.compiler()?;

        let built = match self {
            Self::All => {
                let manifest = compiler.build_all().context("Build failed")?;
                println!(
                    "Built {} datasets into {}",
                    manifest.len(),
                    project.store.base_dir().display()
                );
                return Ok(());
            }
            Self::Attributes => compiler.build_attributes(),
            Self::Items => compiler.build_items(),
            Self::Quests => compiler.build_quests(),
            Self::Requirements => compiler.build_requirements(),
            Self::Player => compiler.build_player(),
        };
        built.with_context(|| format!("Failed to build {:?}", self))?;
        compiler
            .update_manifest()
            .context("Failed to update manifest")?;

        for (dataset, digest) in compiler.manifest() {
            println!("{}  {}", &digest[..12], dataset);
        }
        Ok(())
    }
}
