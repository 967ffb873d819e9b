//! Builtin seed catalog: a small fleet drawn from three franchises, curated so
//! that every question in the narrowing flow has discriminating work to do.

use once_cell::sync::Lazy;

use crate::ship::{Crew, Engine, Ship, Size, Weapon};

static BUILTIN: Lazy<Vec<Ship>> = Lazy::new(|| {
    vec![
        // Star Trek
        Ship {
            name: "Federation attack fighter".to_string(),
            size: Size::Small,
            engines: vec![Engine::Impulse],
            weapons: vec![Weapon::Phaser, Weapon::PhotonTorpedo],
            crew: Crew::Allied,
        },
        Ship {
            name: "NX Alpha".to_string(),
            size: Size::Mid,
            engines: vec![Engine::Impulse, Engine::Warp],
            weapons: vec![Weapon::None],
            crew: Crew::Allied,
        },
        Ship {
            name: "Enterprise (NX-01)".to_string(),
            size: Size::Large,
            engines: vec![Engine::Impulse, Engine::Warp],
            weapons: vec![Weapon::Phaser, Weapon::PhotonTorpedo],
            crew: Crew::Allied,
        },
        Ship {
            name: "USS Franklin (NX-326)".to_string(),
            size: Size::Large,
            engines: vec![Engine::Impulse, Engine::Warp],
            weapons: vec![Weapon::Phaser, Weapon::PhotonTorpedo],
            crew: Crew::Allied,
        },
        Ship {
            name: "USS Defiant (NX-74205)".to_string(),
            size: Size::Mid,
            engines: vec![Engine::Impulse, Engine::Warp],
            weapons: vec![Weapon::Phaser, Weapon::PhotonTorpedo],
            crew: Crew::Allied,
        },
        Ship {
            name: "IKS Toh'Kaht (Klingon attack cruiser)".to_string(),
            size: Size::Large,
            engines: vec![Engine::Impulse, Engine::Warp],
            weapons: vec![Weapon::Disruptor, Weapon::PhotonTorpedo],
            crew: Crew::Hostile,
        },
        Ship {
            name: "Scimitar (Reman warbird)".to_string(),
            size: Size::Large,
            engines: vec![Engine::Impulse, Engine::Warp],
            weapons: vec![Weapon::Disruptor, Weapon::PhotonTorpedo],
            crew: Crew::Hostile,
        },
        // Star Wars
        Ship {
            name: "X-Wing".to_string(),
            size: Size::Small,
            engines: vec![Engine::Sublight],
            weapons: vec![Weapon::Laser, Weapon::ProtonTorpedo],
            crew: Crew::Allied,
        },
        Ship {
            name: "Millenium Falcon (YT-1300)".to_string(),
            size: Size::Mid,
            engines: vec![Engine::Sublight, Engine::Hyper],
            weapons: vec![Weapon::Laser, Weapon::Missiles],
            crew: Crew::Allied,
        },
        Ship {
            name: "Home One (MC80)".to_string(),
            size: Size::Large,
            engines: vec![Engine::Sublight, Engine::Hyper],
            weapons: vec![Weapon::Laser, Weapon::Ion],
            crew: Crew::Allied,
        },
        Ship {
            name: "Tie Fighter".to_string(),
            size: Size::Small,
            engines: vec![Engine::Sublight],
            weapons: vec![Weapon::Laser, Weapon::ProtonTorpedo],
            crew: Crew::Hostile,
        },
        Ship {
            name: "Slave I (Firespray-31-class)".to_string(),
            size: Size::Small,
            engines: vec![Engine::Sublight, Engine::Hyper],
            weapons: vec![
                Weapon::Laser,
                Weapon::Ion,
                Weapon::ProtonTorpedo,
                Weapon::Missiles,
            ],
            crew: Crew::Hostile,
        },
        Ship {
            name: "Star Destroyer (Imperial-class)".to_string(),
            size: Size::Large,
            engines: vec![Engine::Sublight, Engine::Hyper],
            weapons: vec![Weapon::Laser, Weapon::Ion, Weapon::Missiles],
            crew: Crew::Hostile,
        },
        // Battlestar Galactica
        Ship {
            name: "Viper Mk VII".to_string(),
            size: Size::Small,
            engines: vec![Engine::TurboThrust],
            weapons: vec![Weapon::Kinetic, Weapon::Missiles],
            crew: Crew::Allied,
        },
        Ship {
            name: "Raptor".to_string(),
            size: Size::Mid,
            engines: vec![Engine::Sublight, Engine::TurboThrust],
            weapons: vec![Weapon::Kinetic, Weapon::Missiles],
            crew: Crew::Allied,
        },
        Ship {
            name: "Battlestar Galactica".to_string(),
            size: Size::Large,
            engines: vec![Engine::Sublight, Engine::TurboThrust],
            weapons: vec![Weapon::Batteries, Weapon::Missiles],
            crew: Crew::Allied,
        },
        Ship {
            name: "Cylon Raider".to_string(),
            size: Size::Small,
            engines: vec![Engine::Sublight, Engine::FasterThanLight],
            weapons: vec![Weapon::Kinetic, Weapon::Missiles],
            crew: Crew::Hostile,
        },
        Ship {
            name: "Cylon Basestar".to_string(),
            size: Size::Large,
            engines: vec![Engine::Sublight, Engine::FasterThanLight],
            weapons: vec![Weapon::Missiles],
            crew: Crew::Hostile,
        },
    ]
});

pub(crate) fn builtin_ships() -> Vec<Ship> {
    BUILTIN.clone()
}
