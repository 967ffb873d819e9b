use shipfinder_catalog::{Crew, Engine, FieldParseError, ShipMatch, ShipQuery, Size, Weapon};

/// The four searchable fields, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Size,
    Engines,
    Weapons,
    Crew,
}

/// Descriptor for one question in the flow. The controller walks the
/// [`FIELDS`] table top to bottom; there is no other ordering mechanism.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub prompt: &'static str,
    pub multi_valued: bool,
}

pub const FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        id: FieldId::Size,
        prompt: "What size is the ship?",
        multi_valued: false,
    },
    FieldSpec {
        id: FieldId::Engines,
        prompt: "What type of engines does the ship have?",
        multi_valued: true,
    },
    FieldSpec {
        id: FieldId::Weapons,
        prompt: "How about the weapons on the ship?",
        multi_valued: true,
    },
    FieldSpec {
        id: FieldId::Crew,
        prompt: "What kind of crew typically runs the ship?",
        multi_valued: false,
    },
];

/// A parsed answer for a specific field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAnswer {
    Size(Size),
    Engine(Engine),
    Weapon(Weapon),
    Crew(Crew),
}

impl FieldAnswer {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FieldAnswer::Size(v) => v.label(),
            FieldAnswer::Engine(v) => v.label(),
            FieldAnswer::Weapon(v) => v.label(),
            FieldAnswer::Crew(v) => v.label(),
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            FieldAnswer::Size(v) => v.key(),
            FieldAnswer::Engine(v) => v.key(),
            FieldAnswer::Weapon(v) => v.key(),
            FieldAnswer::Crew(v) => v.key(),
        }
    }

    /// Fold the answer into a query: single-valued fields are set, multi-valued
    /// fields accumulate (duplicates ignored).
    pub fn apply(self, query: &mut ShipQuery) {
        match self {
            FieldAnswer::Size(v) => query.size = Some(v),
            FieldAnswer::Engine(v) => query.add_engine(v),
            FieldAnswer::Weapon(v) => query.add_weapon(v),
            FieldAnswer::Crew(v) => query.crew = Some(v),
        }
    }
}

impl FieldId {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FieldId::Size => "size",
            FieldId::Engines => "engines",
            FieldId::Weapons => "weapons",
            FieldId::Crew => "crew",
        }
    }

    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        match self {
            FieldId::Size => &FIELDS[0],
            FieldId::Engines => &FIELDS[1],
            FieldId::Weapons => &FIELDS[2],
            FieldId::Crew => &FIELDS[3],
        }
    }

    /// Typed parse of a raw answer for this field.
    pub fn parse(self, raw: &str) -> Result<FieldAnswer, FieldParseError> {
        match self {
            FieldId::Size => raw.parse().map(FieldAnswer::Size),
            FieldId::Engines => raw.parse().map(FieldAnswer::Engine),
            FieldId::Weapons => raw.parse().map(FieldAnswer::Weapon),
            FieldId::Crew => raw.parse().map(FieldAnswer::Crew),
        }
    }

    /// The field's full value set, used before any search has run.
    #[must_use]
    pub fn default_options(self) -> Vec<FieldAnswer> {
        match self {
            FieldId::Size => Size::ALL.iter().copied().map(FieldAnswer::Size).collect(),
            FieldId::Engines => Engine::ALL
                .iter()
                .copied()
                .map(FieldAnswer::Engine)
                .collect(),
            FieldId::Weapons => Weapon::ALL
                .iter()
                .copied()
                .map(FieldAnswer::Weapon)
                .collect(),
            FieldId::Crew => Crew::ALL.iter().copied().map(FieldAnswer::Crew).collect(),
        }
    }

    /// Distinct values of this field across the candidates, first-seen order.
    #[must_use]
    pub fn options(self, candidates: &[ShipMatch]) -> Vec<FieldAnswer> {
        let mut options = Vec::new();
        for candidate in candidates {
            match self {
                FieldId::Size => push_unique(&mut options, FieldAnswer::Size(candidate.ship.size)),
                FieldId::Engines => {
                    for &engine in &candidate.ship.engines {
                        push_unique(&mut options, FieldAnswer::Engine(engine));
                    }
                }
                FieldId::Weapons => {
                    for &weapon in &candidate.ship.weapons {
                        push_unique(&mut options, FieldAnswer::Weapon(weapon));
                    }
                }
                FieldId::Crew => push_unique(&mut options, FieldAnswer::Crew(candidate.ship.crew)),
            }
        }
        options
    }

    /// How many distinct values of this field remain across the candidates.
    #[must_use]
    pub fn distinct_count(self, candidates: &[ShipMatch]) -> usize {
        self.options(candidates).len()
    }
}

fn push_unique(options: &mut Vec<FieldAnswer>, answer: FieldAnswer) {
    if !options.contains(&answer) {
        options.push(answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shipfinder_catalog::{Catalog, ShipQuery};

    fn candidates(query: &ShipQuery) -> Vec<ShipMatch> {
        Catalog::builtin().find_matches(query)
    }

    #[test]
    fn field_order_is_size_engines_weapons_crew() {
        let order: Vec<FieldId> = FIELDS.iter().map(|spec| spec.id).collect();
        assert_eq!(
            order,
            vec![
                FieldId::Size,
                FieldId::Engines,
                FieldId::Weapons,
                FieldId::Crew
            ]
        );
    }

    #[test]
    fn spec_lookup_agrees_with_table() {
        for spec in &FIELDS {
            assert_eq!(spec.id.spec().prompt, spec.prompt);
        }
    }

    #[test]
    fn options_are_distinct_and_first_seen_ordered() {
        let query = ShipQuery {
            size: Some(shipfinder_catalog::Size::Small),
            ..ShipQuery::default()
        };
        let smalls = candidates(&query);
        let engines = FieldId::Engines.options(&smalls);
        // First small ship runs impulse engines, the rest follow in catalog order.
        assert_eq!(engines[0], FieldAnswer::Engine(Engine::Impulse));
        let mut deduped = engines.clone();
        deduped.dedup();
        assert_eq!(engines, deduped);
    }

    #[test]
    fn distinct_count_collapses_shared_values() {
        let mut query = ShipQuery {
            size: Some(shipfinder_catalog::Size::Large),
            ..ShipQuery::default()
        };
        query.add_weapon(Weapon::PhotonTorpedo);
        let matches = candidates(&query);
        // All four large photon-torpedo ships run impulse+warp.
        assert_eq!(FieldId::Engines.distinct_count(&matches), 2);
        assert_eq!(FieldId::Crew.distinct_count(&matches), 2);
    }

    #[test]
    fn parse_dispatches_per_field() {
        assert_eq!(
            FieldId::Size.parse("small"),
            Ok(FieldAnswer::Size(Size::Small))
        );
        assert_eq!(
            FieldId::Weapons.parse("photon torpedos"),
            Ok(FieldAnswer::Weapon(Weapon::PhotonTorpedo))
        );
        // A valid value for another field is still a parse failure here.
        assert!(FieldId::Size.parse("warp").is_err());
    }

    #[test]
    fn apply_accumulates_multi_valued_fields() {
        let mut query = ShipQuery::new();
        FieldAnswer::Engine(Engine::Warp).apply(&mut query);
        FieldAnswer::Engine(Engine::Impulse).apply(&mut query);
        FieldAnswer::Engine(Engine::Warp).apply(&mut query);
        assert_eq!(query.engines, vec![Engine::Warp, Engine::Impulse]);

        FieldAnswer::Size(Size::Mid).apply(&mut query);
        FieldAnswer::Size(Size::Large).apply(&mut query);
        assert_eq!(query.size, Some(Size::Large));
    }
}
