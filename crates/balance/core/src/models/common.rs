//! Small value types shared by every entity family.

/// Whether an enemy, weapon or skill acts at melee or ranged distance.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum RangeType {
    Melee,
    Ranged,
}

/// Who or what an attribute can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum TargetType {
    /// The user and/or their own team.
    #[strum(serialize = "Self")]
    Ally,
    /// Enemies only.
    Enemy,
    /// An area of choice.
    Radius,
    /// Enemies and allies.
    Both,
    /// Enemies and allies inside an area of choice (AOE).
    All,
}

string_enum!(TargetType);

/// Target mechanics of an attribute or skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetMechanics {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub target_type: TargetType,
    /// Number of targets that can be affected.
    ///
    /// Radius targets normally use 0 unless the count is capped.
    pub count: u32,
}

impl TargetMechanics {
    pub const fn new(target_type: TargetType, count: u32) -> Self {
        Self { target_type, count }
    }
}

/// Status effects an attribute may inflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffect {
    /// Damage over time from poison.
    Toxic,
    /// Damage over time from fire.
    Burn,
    /// Damage over time from wounds.
    Bleed,
    /// Prevents movement.
    Stun,
    /// Reduces accuracy.
    Blind,
    /// Resistance to weapon and skill damage.
    Resilience,
    None,
}

/// How a modifier value is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierType {
    /// `value` is a percentage.
    Percentage,
    /// `value` is a plain number.
    Number,
}

/// A typed modifier value attached to an attribute instance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ModifierType,
    pub value: f64,
}

impl Modifier {
    pub const fn new(kind: ModifierType, value: f64) -> Self {
        Self { kind, value }
    }

    pub const fn percentage(value: f64) -> Self {
        Self::new(ModifierType::Percentage, value)
    }
}
