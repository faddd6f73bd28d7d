use std::collections::HashSet;

use balance_content::{ContentFactory, DATA_DIR};
use balance_core::{AttributeCatalog, KillRewards, TargetType};

fn factory() -> ContentFactory {
    ContentFactory::new(DATA_DIR)
}

#[test]
fn shipped_content_loads() {
    let content = factory().load_content().unwrap();
    assert_eq!(content.attributes.len(), 9);
    assert_eq!(content.items.len(), 2);
    assert_eq!(content.enemies.len(), 3);
    assert_eq!(content.weapons.len(), 1);
    assert_eq!(content.skills.damaging.len(), 3);
    assert_eq!(content.skills.non_damaging.len(), 2);
    assert_eq!(content.player.max_level, 150);
}

#[test]
fn attributes_are_unique() {
    let attributes = factory().load_attributes().unwrap();
    assert!(AttributeCatalog::strict(attributes).is_ok());
}

#[test]
fn quest_keys_are_unique() {
    let quests = factory().load_quests().unwrap();
    let mut keys = HashSet::new();
    for quest in &quests {
        assert!(keys.insert(quest.key()), "duplicate quest {:?}", quest.key());
    }
    assert!(quests[0].requirements.is_none());
    let hut = quests.iter().find(|q| q.key() == (5, 3)).unwrap();
    assert_eq!(hut.requirements.as_ref().unwrap().kills_required, Some(175));
}

#[test]
fn every_spec_resolves_against_catalog() {
    let content = factory().load_content().unwrap();
    let catalog = AttributeCatalog::strict(content.attributes).unwrap();

    for enemy in &content.enemies {
        enemy.growth.validate_coverage(enemy.max_level).unwrap();
        enemy.generate(&catalog).unwrap();
    }
    for weapon in &content.weapons {
        weapon.growth.validate_coverage(weapon.max_level).unwrap();
        weapon.upgrade_cost.validate(weapon.max_level).unwrap();
        weapon.generate(&catalog).unwrap();
    }
    for skill in &content.skills.damaging {
        skill.growth.validate_coverage(skill.profile.max_level).unwrap();
        skill.profile.upgrade_cost.validate(skill.profile.max_level).unwrap();
        skill.generate(&catalog).unwrap();
    }
    for skill in &content.skills.non_damaging {
        skill.growth.validate_coverage(skill.profile.max_level).unwrap();
        skill.profile.upgrade_cost.validate(skill.profile.max_level).unwrap();
        let generated = skill.generate(&catalog).unwrap();
        assert_eq!(generated.target_mechanics.target_type, TargetType::Ally);
    }
}

#[test]
fn firefly_matches_authored_curve() {
    let content = factory().load_content().unwrap();
    let catalog = AttributeCatalog::new(content.attributes);
    let firefly = content
        .enemies
        .iter()
        .find(|enemy| enemy.slug == "firefly")
        .unwrap()
        .generate(&catalog)
        .unwrap();

    assert_eq!(firefly.level_mechanics[4].base_hp, 118.0);
    assert_eq!(
        firefly.level_mechanics[0].kill_rewards,
        Some(KillRewards { coins: 3, xp: 7 })
    );
}

#[test]
fn trufo_has_no_kill_rewards() {
    let enemies = factory().load_enemies().unwrap();
    let trufo = enemies.iter().find(|enemy| enemy.slug == "trufo").unwrap();
    assert!(trufo.kill_rewards.is_none());
}
