use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldParseError;

/// Hull size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    Mid,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Mid, Size::Large];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Mid => "Mid",
            Size::Large => "Large",
        }
    }

    /// Stable machine-readable key, identical to the serde wire form.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Mid => "mid",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "small" => Ok(Size::Small),
            "mid" | "medium" => Ok(Size::Mid),
            "large" | "big" => Ok(Size::Large),
            _ => Err(FieldParseError::new("size", raw)),
        }
    }
}

/// Propulsion system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    Impulse,
    Warp,
    Sublight,
    Hyper,
    TurboThrust,
    FasterThanLight,
}

impl Engine {
    pub const ALL: [Engine; 6] = [
        Engine::Impulse,
        Engine::Warp,
        Engine::Sublight,
        Engine::Hyper,
        Engine::TurboThrust,
        Engine::FasterThanLight,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Engine::Impulse => "Impulse",
            Engine::Warp => "Warp",
            Engine::Sublight => "Sublight",
            Engine::Hyper => "Hyper",
            Engine::TurboThrust => "Turbo thrust",
            Engine::FasterThanLight => "Faster than light",
        }
    }

    /// Stable machine-readable key, identical to the serde wire form.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Engine::Impulse => "impulse",
            Engine::Warp => "warp",
            Engine::Sublight => "sublight",
            Engine::Hyper => "hyper",
            Engine::TurboThrust => "turbo-thrust",
            Engine::FasterThanLight => "faster-than-light",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Engine {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "impulse" => Ok(Engine::Impulse),
            "warp" => Ok(Engine::Warp),
            "sublight" => Ok(Engine::Sublight),
            "hyper" | "hyperdrive" => Ok(Engine::Hyper),
            "turbothrust" | "turbo" => Ok(Engine::TurboThrust),
            "fasterthanlight" | "ftl" => Ok(Engine::FasterThanLight),
            _ => Err(FieldParseError::new("engine type", raw)),
        }
    }
}

/// Armament. `None` is a concrete value meaning "unarmed", not a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weapon {
    None,
    Phaser,
    Disruptor,
    PhotonTorpedo,
    Laser,
    Ion,
    ProtonTorpedo,
    Kinetic,
    Batteries,
    Missiles,
}

impl Weapon {
    pub const ALL: [Weapon; 10] = [
        Weapon::None,
        Weapon::Phaser,
        Weapon::Disruptor,
        Weapon::PhotonTorpedo,
        Weapon::Laser,
        Weapon::Ion,
        Weapon::ProtonTorpedo,
        Weapon::Kinetic,
        Weapon::Batteries,
        Weapon::Missiles,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Weapon::None => "None",
            Weapon::Phaser => "Phaser",
            Weapon::Disruptor => "Disruptor",
            Weapon::PhotonTorpedo => "Photon torpedos",
            Weapon::Laser => "Laser",
            Weapon::Ion => "Ion",
            Weapon::ProtonTorpedo => "Proton torpedos",
            Weapon::Kinetic => "Kinetic energy",
            Weapon::Batteries => "Batteries",
            Weapon::Missiles => "Missiles",
        }
    }

    /// Stable machine-readable key, identical to the serde wire form.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Weapon::None => "none",
            Weapon::Phaser => "phaser",
            Weapon::Disruptor => "disruptor",
            Weapon::PhotonTorpedo => "photon-torpedo",
            Weapon::Laser => "laser",
            Weapon::Ion => "ion",
            Weapon::ProtonTorpedo => "proton-torpedo",
            Weapon::Kinetic => "kinetic",
            Weapon::Batteries => "batteries",
            Weapon::Missiles => "missiles",
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weapon {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "none" | "unarmed" => Ok(Weapon::None),
            "phaser" | "phasers" => Ok(Weapon::Phaser),
            "disruptor" | "disruptors" => Ok(Weapon::Disruptor),
            "photontorpedo" | "photontorpedos" | "photontorpedoes" => Ok(Weapon::PhotonTorpedo),
            "laser" | "lasers" => Ok(Weapon::Laser),
            "ion" => Ok(Weapon::Ion),
            "protontorpedo" | "protontorpedos" | "protontorpedoes" => Ok(Weapon::ProtonTorpedo),
            "kinetic" | "kineticenergy" => Ok(Weapon::Kinetic),
            "batteries" | "battery" => Ok(Weapon::Batteries),
            "missiles" | "missile" => Ok(Weapon::Missiles),
            _ => Err(FieldParseError::new("weapon type", raw)),
        }
    }
}

/// Typical crew alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Crew {
    Allied,
    Hostile,
}

impl Crew {
    pub const ALL: [Crew; 2] = [Crew::Allied, Crew::Hostile];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Crew::Allied => "Allied",
            Crew::Hostile => "Hostile",
        }
    }

    /// Stable machine-readable key, identical to the serde wire form.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Crew::Allied => "allied",
            Crew::Hostile => "hostile",
        }
    }
}

impl fmt::Display for Crew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Crew {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "allied" | "good" | "goodguys" => Ok(Crew::Allied),
            "hostile" | "bad" | "badguys" => Ok(Crew::Hostile),
            _ => Err(FieldParseError::new("crew type", raw)),
        }
    }
}

/// Lowercase and strip everything but ASCII alphanumerics, so "Photon Torpedos",
/// "photon-torpedo" and "photontorpedos" all land on the same key.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A fully-specified catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub name: String,
    pub size: Size,
    pub engines: Vec<Engine>,
    pub weapons: Vec<Weapon>,
    pub crew: Crew,
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" ({}; engines: {}; weapons: {}; {} crew)",
            self.name,
            self.size,
            join_labels(self.engines.iter().map(|e| e.label())),
            join_labels(self.weapons.iter().map(|w| w.label())),
            self.crew,
        )
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}

/// A partially-specified record used as a filter. Unset fields and empty sets
/// impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub engines: Vec<Engine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weapons: Vec<Weapon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crew: Option<Crew>,
}

impl ShipQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an engine constraint; repeated values are ignored.
    pub fn add_engine(&mut self, engine: Engine) {
        if !self.engines.contains(&engine) {
            self.engines.push(engine);
        }
    }

    /// Add a weapon constraint; repeated values are ignored.
    pub fn add_weapon(&mut self, weapon: Weapon) {
        if !self.weapons.contains(&weapon) {
            self.weapons.push(weapon);
        }
    }

    /// True when every field is a wildcard.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.is_none()
            && self.engines.is_empty()
            && self.weapons.is_empty()
            && self.crew.is_none()
    }

    /// Partial-match predicate: every constrained field of the query must be
    /// satisfied by the ship; multi-valued constraints use subset semantics.
    #[must_use]
    pub fn matches(&self, ship: &Ship) -> bool {
        if self.size.is_some_and(|size| size != ship.size) {
            return false;
        }
        if !self.engines.iter().all(|e| ship.engines.contains(e)) {
            return false;
        }
        if !self.weapons.iter().all(|w| ship.weapons.contains(w)) {
            return false;
        }
        if self.crew.is_some_and(|crew| crew != ship.crew) {
            return false;
        }
        true
    }
}
