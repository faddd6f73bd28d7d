//! Attribute catalog and name resolution.

use crate::error::{MechanicsError, Result};
use crate::models::Attribute;

/// The immutable set of attributes every generator resolves against.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttributeCatalog {
    attributes: Vec<Attribute>,
}

impl AttributeCatalog {
    /// Builds a catalog as authored. Later duplicates shadow earlier ones.
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// Builds a catalog, rejecting any name that appears twice.
    pub fn strict(attributes: Vec<Attribute>) -> Result<Self> {
        if let Some(name) = first_duplicate(&attributes) {
            return Err(MechanicsError::DuplicateAttribute {
                name: name.to_owned(),
            });
        }
        Ok(Self::new(attributes))
    }

    /// Resolves an attribute by exact name.
    ///
    /// The scan keeps the last match, so a later record overrides an earlier
    /// one with the same name.
    pub fn resolve(&self, name: &str) -> Result<&Attribute> {
        let mut found = None;
        for attribute in &self.attributes {
            if attribute.name == name {
                found = Some(attribute);
            }
        }
        found.ok_or_else(|| MechanicsError::AttributeNotFound {
            name: name.to_owned(),
        })
    }

    /// Names that appear more than once, in first-seen order.
    pub fn shadowed_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (index, attribute) in self.attributes.iter().enumerate() {
            let name = attribute.name.as_str();
            let repeated = self.attributes[..index].iter().any(|a| a.name == name);
            if repeated && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

fn first_duplicate(attributes: &[Attribute]) -> Option<&str> {
    attributes.iter().enumerate().find_map(|(index, attribute)| {
        attributes[..index]
            .iter()
            .any(|earlier| earlier.name == attribute.name)
            .then_some(attribute.name.as_str())
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{AttributeType, TargetMechanics, TargetType};

    pub(crate) fn attribute(name: &str, description: &str) -> Attribute {
        Attribute {
            name: name.into(),
            description: description.into(),
            types: vec![AttributeType::SetDamage],
            range_type: None,
            target_mechanics: TargetMechanics::new(TargetType::Enemy, 1),
            status_effect: None,
            modifier: 0.0,
            duration: 0.0,
            chance: 0.0,
            radius: 0.0,
        }
    }

    #[test]
    fn resolve_returns_last_match() {
        let catalog = AttributeCatalog::new(vec![
            attribute("Ignite", "first"),
            attribute("Stun", "stun"),
            attribute("Ignite", "second"),
        ]);
        assert_eq!(catalog.resolve("Ignite").unwrap().description, "second");
        assert_eq!(catalog.shadowed_names(), vec!["Ignite"]);
    }

    #[test]
    fn resolve_miss_is_an_error() {
        let catalog = AttributeCatalog::new(vec![attribute("Stun", "")]);
        let err = catalog.resolve("Ignite").unwrap_err();
        assert_eq!(
            err,
            MechanicsError::AttributeNotFound {
                name: "Ignite".into()
            }
        );
        assert!(AttributeCatalog::default().resolve("Stun").is_err());
    }

    #[test]
    fn strict_rejects_duplicates() {
        let err = AttributeCatalog::strict(vec![attribute("Heal", ""), attribute("Heal", "")])
            .unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_ATTRIBUTE");
        assert!(AttributeCatalog::strict(vec![attribute("Heal", "")]).is_ok());
    }
}
