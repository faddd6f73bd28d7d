//! List authored entities or built datasets.

use anyhow::Result;
use balance_compiler::BlobStore;
use balance_core::{DamagingSkillSpec, NonDamagingSkillSpec, WeaponRarity};
use clap::Parser;
use strum::IntoEnumIterator;

use super::Project;

/// List authored entities or built datasets
#[derive(Parser)]
pub struct List {
    /// List datasets present in the output directory instead
    #[arg(short, long)]
    built: bool,
}

impl List {
    pub fn execute(self, project: &Project) -> Result<()> {
        if self.built {
            let datasets = project.store.list()?;
            if datasets.is_empty() {
                println!("No datasets in {}", project.store.base_dir().display());
            }
            for dataset in datasets {
                println!("{}", dataset);
            }
            return Ok(());
        }

        let compiler = project.compiler()?;
        let content = compiler.content();

        println!("Enemies:");
        for enemy in &content.enemies {
            println!("  {:<24} {}", enemy.slug, enemy.name);
        }

        println!("Weapons:");
        for rarity in WeaponRarity::iter() {
            for weapon in content.weapons.iter().filter(|w| w.rarity == rarity) {
                println!("  {:<24} {} ({})", weapon.slug, weapon.name, rarity);
            }
        }

        println!("Skills:");
        for skill in &content.skills.damaging {
            let profile = &skill.profile;
            println!("  {:<24} {} ({})", profile.slug, profile.name, DamagingSkillSpec::CATEGORY);
        }
        for skill in &content.skills.non_damaging {
            let profile = &skill.profile;
            println!(
                "  {:<24} {} ({})",
                profile.slug,
                profile.name,
                NonDamagingSkillSpec::CATEGORY
            );
        }

        Ok(())
    }
}
