//! The dataset build pipeline.
//!
//! A [`Compiler`] owns the loaded content and the attribute catalog and
//! writes datasets to a [`BlobStore`] in dependency order:
//!
//! ```text
//! attributes -> items -> quests -> requirements -> player -> entities
//! ```
//!
//! Each entity is generated completely in memory before its single write,
//! so a failing entity leaves no dataset behind.

use std::collections::{BTreeMap, HashSet};

use balance_content::{Content, ContentFactory};
use balance_core::{AttributeCatalog, LevelRequirement};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

use crate::config::CompilerConfig;
use crate::error::{CompileError, Result};
use crate::requirements::{self, RequirementLayout};
use crate::sheet::SheetSource;
use crate::store::{self, BlobStore, DatasetKey};

/// Dataset path to the hex sha256 of its encoded bytes.
pub type Manifest = BTreeMap<String, String>;

/// Options controlling a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Fail on duplicate names and malformed tables instead of warning.
    pub strict: bool,
    pub skill_requirements: RequirementLayout,
    pub weapon_requirements: RequirementLayout,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            strict: false,
            skill_requirements: RequirementLayout::skills(),
            weapon_requirements: RequirementLayout::weapons(),
        }
    }
}

impl From<&CompilerConfig> for CompileOptions {
    fn from(config: &CompilerConfig) -> Self {
        Self {
            strict: config.strict,
            skill_requirements: config.skill_requirements.clone(),
            weapon_requirements: config.weapon_requirements.clone(),
        }
    }
}

/// Encodes and stores datasets, recording their digests.
struct Output<'a> {
    store: &'a dyn BlobStore,
    manifest: Manifest,
}

impl Output<'_> {
    fn publish<T: Serialize + ?Sized>(&mut self, key: &DatasetKey, value: &T) -> Result<()> {
        let bytes = store::encode(value)?;
        self.store.put(key, &bytes)?;

        let digest = hex::encode(Sha256::digest(&bytes));
        tracing::info!("Wrote {} ({} bytes)", key, bytes.len());
        self.manifest.insert(key.path(), digest);
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &DatasetKey) -> Result<T> {
        let bytes = self
            .store
            .get(key)?
            .ok_or_else(|| CompileError::MissingDataset {
                dataset: key.path(),
            })?;
        Ok(store::decode(&bytes)?)
    }
}

/// Builds datasets from loaded content.
pub struct Compiler<'a> {
    content: Content,
    catalog: AttributeCatalog,
    sheets: &'a dyn SheetSource,
    output: Output<'a>,
    options: CompileOptions,
}

impl<'a> Compiler<'a> {
    pub fn new(
        content: Content,
        sheets: &'a dyn SheetSource,
        store: &'a dyn BlobStore,
        options: CompileOptions,
    ) -> Result<Self> {
        let catalog = if options.strict {
            AttributeCatalog::strict(content.attributes.clone())
                .map_err(|e| CompileError::entity("attribute catalog", DatasetKey::Attributes, e))?
        } else {
            let catalog = AttributeCatalog::new(content.attributes.clone());
            for name in catalog.shadowed_names() {
                tracing::warn!(
                    "Attribute '{}' is defined more than once; the last definition wins",
                    name
                );
            }
            catalog
        };

        Ok(Self {
            content,
            catalog,
            sheets,
            output: Output {
                store,
                manifest: Manifest::new(),
            },
            options,
        })
    }

    /// Loads content through `factory`, then builds as [`Compiler::new`].
    pub fn load(
        factory: &ContentFactory,
        sheets: &'a dyn SheetSource,
        store: &'a dyn BlobStore,
        options: CompileOptions,
    ) -> Result<Self> {
        let content = factory.load_content()?;
        tracing::info!(
            "Loaded content from {} (strict: {})",
            factory.data_dir().display(),
            options.strict
        );
        Self::new(content, sheets, store, options)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    /// Digests of the datasets written so far.
    pub fn manifest(&self) -> &Manifest {
        &self.output.manifest
    }

    /// Builds every dataset in dependency order, then the manifest.
    pub fn build_all(&mut self) -> Result<Manifest> {
        self.build_attributes()?;
        self.build_items()?;
        self.build_quests()?;
        self.build_requirements()?;
        self.build_player()?;

        let enemies: Vec<String> = self.content.enemies.iter().map(|e| e.slug.clone()).collect();
        for slug in &enemies {
            self.build_enemy(slug)?;
        }

        let weapons: Vec<String> = self.content.weapons.iter().map(|w| w.slug.clone()).collect();
        for slug in &weapons {
            self.build_weapon(slug)?;
        }

        let skills: Vec<String> = self.content.skills.slugs().map(str::to_owned).collect();
        for slug in &skills {
            self.build_skill(slug)?;
        }

        self.write_manifest()?;
        tracing::info!("Build complete: {} datasets", self.output.manifest.len());
        Ok(self.output.manifest.clone())
    }

    pub fn build_attributes(&mut self) -> Result<()> {
        self.output
            .publish(&DatasetKey::Attributes, self.catalog.attributes())
    }

    pub fn build_items(&mut self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.content.items {
            if !seen.insert(item.name.as_str()) {
                self.duplicate("item", &item.name)?;
            }
        }
        self.output.publish(&DatasetKey::Items, &self.content.items)
    }

    pub fn build_quests(&mut self) -> Result<()> {
        let mut seen = HashSet::new();
        for quest in &self.content.quests {
            if !seen.insert(quest.key()) {
                let (chapter, id) = quest.key();
                self.duplicate("quest", &format!("chapter {} quest {}", chapter, id))?;
            }
        }
        self.output.publish(&DatasetKey::Quests, &self.content.quests)
    }

    /// Extracts both requirement tables from the workbook and publishes them.
    pub fn build_requirements(&mut self) -> Result<()> {
        let skills = requirements::extract(self.sheets, &self.options.skill_requirements)?;
        let weapons = requirements::extract(self.sheets, &self.options.weapon_requirements)?;

        self.output
            .publish(&DatasetKey::SkillLevelRequirement, &skills)?;
        self.output
            .publish(&DatasetKey::WeaponLevelRequirement, &weapons)
    }

    /// Generates the player table from the published requirement datasets.
    pub fn build_player(&mut self) -> Result<()> {
        let skills: Vec<LevelRequirement> =
            self.output.read(&DatasetKey::SkillLevelRequirement)?;
        let weapons: Vec<LevelRequirement> =
            self.output.read(&DatasetKey::WeaponLevelRequirement)?;

        let key = DatasetKey::PlayerLevelMechanics;
        let mechanics = self
            .content
            .player
            .generate(&skills, &weapons)
            .map_err(|e| CompileError::entity("player", &key, e))?;

        tracing::debug!("Generated {} player levels", mechanics.len());
        self.output.publish(&key, &mechanics)
    }

    pub fn build_enemy(&mut self, slug: &str) -> Result<()> {
        let spec = self
            .content
            .enemies
            .iter()
            .find(|enemy| enemy.slug == slug)
            .ok_or_else(|| unknown("enemy", slug))?;

        let key = DatasetKey::enemy(slug);
        let enemy = self
            .checked(|| spec.growth.validate_coverage(spec.max_level))
            .and_then(|()| spec.generate(&self.catalog))
            .map_err(|e| CompileError::entity(&spec.name, &key, e))?;

        tracing::debug!("Generated {} levels for {}", enemy.level_mechanics.len(), spec.name);
        self.output.publish(&key, &enemy)
    }

    pub fn build_weapon(&mut self, slug: &str) -> Result<()> {
        let spec = self
            .content
            .weapons
            .iter()
            .find(|weapon| weapon.slug == slug)
            .ok_or_else(|| unknown("weapon", slug))?;

        let key = DatasetKey::weapon(spec.rarity, slug);
        let weapon = self
            .checked(|| {
                spec.growth.validate_coverage(spec.max_level)?;
                spec.upgrade_cost.validate(spec.max_level)
            })
            .and_then(|()| spec.generate(&self.catalog))
            .map_err(|e| CompileError::entity(&spec.name, &key, e))?;

        tracing::debug!("Generated {} levels for {}", weapon.level_mechanics.len(), spec.name);
        self.output.publish(&key, &weapon)
    }

    /// Builds a damaging or non-damaging skill, whichever owns `slug`.
    pub fn build_skill(&mut self, slug: &str) -> Result<()> {
        let skills = &self.content.skills;

        if let Some(spec) = skills.damaging.iter().find(|s| s.profile.slug == slug) {
            let key = DatasetKey::skill(balance_core::DamagingSkillSpec::CATEGORY, slug);
            let skill = self
                .checked(|| {
                    spec.growth.validate_coverage(spec.profile.max_level)?;
                    spec.profile.upgrade_cost.validate(spec.profile.max_level)
                })
                .and_then(|()| spec.generate(&self.catalog))
                .map_err(|e| CompileError::entity(&spec.profile.name, &key, e))?;

            tracing::debug!("Generated {} levels for {}", skill.level_mechanics.len(), skill.name);
            return self.output.publish(&key, &skill);
        }

        if let Some(spec) = skills.non_damaging.iter().find(|s| s.profile.slug == slug) {
            let key = DatasetKey::skill(balance_core::NonDamagingSkillSpec::CATEGORY, slug);
            let skill = self
                .checked(|| {
                    spec.growth.validate_coverage(spec.profile.max_level)?;
                    spec.profile.upgrade_cost.validate(spec.profile.max_level)
                })
                .and_then(|()| spec.generate(&self.catalog))
                .map_err(|e| CompileError::entity(&spec.profile.name, &key, e))?;

            tracing::debug!("Generated {} levels for {}", skill.level_mechanics.len(), skill.name);
            return self.output.publish(&key, &skill);
        }

        Err(unknown("skill", slug))
    }

    /// Publishes the digests collected so far, replacing any stored manifest.
    pub fn write_manifest(&mut self) -> Result<()> {
        let manifest = self.output.manifest.clone();
        self.store_manifest(&manifest)
    }

    /// Merges the digests collected so far into the stored manifest.
    ///
    /// Used after partial builds so entries for datasets this run did not
    /// touch keep their digests.
    pub fn update_manifest(&mut self) -> Result<()> {
        let mut manifest: Manifest = match self.output.store.get(&DatasetKey::Manifest)? {
            Some(bytes) => store::decode(&bytes)?,
            None => Manifest::new(),
        };
        manifest.extend(
            self.output
                .manifest
                .iter()
                .map(|(dataset, digest)| (dataset.clone(), digest.clone())),
        );
        self.store_manifest(&manifest)
    }

    fn store_manifest(&self, manifest: &Manifest) -> Result<()> {
        let bytes = store::encode(manifest)?;
        self.output.store.put(&DatasetKey::Manifest, &bytes)?;
        tracing::info!("Wrote {} ({} entries)", DatasetKey::Manifest, manifest.len());
        Ok(())
    }

    /// Runs table validation in strict mode only.
    fn checked(
        &self,
        validate: impl FnOnce() -> balance_core::Result<()>,
    ) -> balance_core::Result<()> {
        if self.options.strict { validate() } else { Ok(()) }
    }

    fn duplicate(&self, kind: &'static str, name: &str) -> Result<()> {
        if self.options.strict {
            return Err(CompileError::Duplicate {
                kind,
                name: name.to_owned(),
            });
        }
        tracing::warn!("Duplicate {} '{}' in authored content", kind, name);
        Ok(())
    }
}

fn unknown(kind: &'static str, slug: &str) -> CompileError {
    CompileError::UnknownEntity {
        kind,
        slug: slug.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balance_content::{ContentFactory, DATA_DIR};
    use balance_core::{Item, MechanicsError};

    use crate::sheet::WorkbookFile;
    use crate::store::InMemoryBlobStore;

    fn content() -> Content {
        ContentFactory::new(DATA_DIR).load_content().unwrap()
    }

    fn workbook() -> WorkbookFile {
        WorkbookFile::open(ContentFactory::new(DATA_DIR).workbook_path()).unwrap()
    }

    #[test]
    fn player_requires_requirement_datasets() {
        let sheets = workbook();
        let store = InMemoryBlobStore::new();
        let mut compiler =
            Compiler::new(content(), &sheets, &store, CompileOptions::default()).unwrap();

        let err = compiler.build_player().unwrap_err();
        assert!(matches!(
            err,
            CompileError::MissingDataset { ref dataset } if dataset == "skill-level-requirement"
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_slug() {
        let sheets = workbook();
        let store = InMemoryBlobStore::new();
        let mut compiler =
            Compiler::new(content(), &sheets, &store, CompileOptions::default()).unwrap();

        let err = compiler.build_enemy("dragon").unwrap_err();
        assert!(matches!(err, CompileError::UnknownEntity { kind: "enemy", .. }));
    }

    #[test]
    fn duplicate_items_warn_unless_strict() {
        let mut content = content();
        let blueberry: Item = content.items[0].clone();
        content.items.push(blueberry);

        let sheets = workbook();
        let store = InMemoryBlobStore::new();
        let mut lenient =
            Compiler::new(content.clone(), &sheets, &store, CompileOptions::default()).unwrap();
        lenient.build_items().unwrap();

        let strict_store = InMemoryBlobStore::new();
        let options = CompileOptions {
            strict: true,
            ..CompileOptions::default()
        };
        let mut strict = Compiler::new(content, &sheets, &strict_store, options).unwrap();
        let err = strict.build_items().unwrap_err();
        assert!(matches!(err, CompileError::Duplicate { kind: "item", .. }));
        assert!(strict_store.is_empty());
    }

    #[test]
    fn strict_catalog_rejects_shadowed_attributes() {
        let mut content = content();
        let first = content.attributes[0].clone();
        content.attributes.push(first);

        let sheets = workbook();
        let store = InMemoryBlobStore::new();
        let options = CompileOptions {
            strict: true,
            ..CompileOptions::default()
        };
        let err = Compiler::new(content, &sheets, &store, options).err().unwrap();
        assert!(matches!(
            err,
            CompileError::Entity {
                source: MechanicsError::DuplicateAttribute { .. },
                ..
            }
        ));
    }

    #[test]
    fn load_reports_content_errors() {
        let sheets = workbook();
        let store = InMemoryBlobStore::new();
        let factory = ContentFactory::new("/nonexistent/balance");
        let err = Compiler::load(&factory, &sheets, &store, CompileOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, CompileError::Content(_)));
        assert!(err.to_string().contains("/nonexistent/balance"));
    }

    #[test]
    fn update_manifest_keeps_untouched_entries() {
        let sheets = workbook();
        let store = InMemoryBlobStore::new();
        let full = Compiler::new(content(), &sheets, &store, CompileOptions::default())
            .unwrap()
            .build_all()
            .unwrap();

        let mut content = content();
        let firefly = content
            .enemies
            .iter_mut()
            .find(|enemy| enemy.slug == "firefly")
            .unwrap();
        firefly.base.hp += 1.0;

        let mut partial = Compiler::new(content, &sheets, &store, CompileOptions::default()).unwrap();
        partial.build_enemy("firefly").unwrap();
        partial.update_manifest().unwrap();

        let stored: Manifest =
            store::decode(&store.get(&DatasetKey::Manifest).unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), full.len());
        assert_ne!(stored["enemies/firefly"], full["enemies/firefly"]);
        assert_eq!(stored["enemies/firefly"], partial.manifest()["enemies/firefly"]);
        assert_eq!(stored["enemies/golem"], full["enemies/golem"]);
    }

    #[test]
    fn manifest_tracks_written_datasets() {
        let sheets = workbook();
        let store = InMemoryBlobStore::new();
        let mut compiler =
            Compiler::new(content(), &sheets, &store, CompileOptions::default()).unwrap();

        compiler.build_enemy("firefly").unwrap();
        let digest = &compiler.manifest()["enemies/firefly"];
        assert_eq!(digest.len(), 64);

        let bytes = store.get(&DatasetKey::enemy("firefly")).unwrap().unwrap();
        assert_eq!(*digest, hex::encode(Sha256::digest(&bytes)));
    }
}
