use proptest::option;
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use shipfinder_catalog::{Catalog, Crew, Engine, ShipQuery, Size, Weapon};

fn arb_query() -> impl Strategy<Value = ShipQuery> {
    (
        option::of(select(&Size::ALL[..])),
        subsequence(Engine::ALL.to_vec(), 0..=Engine::ALL.len()),
        subsequence(Weapon::ALL.to_vec(), 0..=Weapon::ALL.len()),
        option::of(select(&Crew::ALL[..])),
    )
        .prop_map(|(size, engines, weapons, crew)| ShipQuery {
            size,
            engines,
            weapons,
            crew,
        })
}

#[derive(Debug, Clone)]
enum Constraint {
    Size(Size),
    Engine(Engine),
    Weapon(Weapon),
    Crew(Crew),
}

fn arb_constraint() -> impl Strategy<Value = Constraint> {
    prop_oneof![
        select(&Size::ALL[..]).prop_map(Constraint::Size),
        select(&Engine::ALL[..]).prop_map(Constraint::Engine),
        select(&Weapon::ALL[..]).prop_map(Constraint::Weapon),
        select(&Crew::ALL[..]).prop_map(Constraint::Crew),
    ]
}

/// Adds a constraint without ever relaxing one: single-valued fields are only
/// filled when still wildcard, multi-valued fields only grow.
fn tighten(query: &ShipQuery, extra: &Constraint) -> ShipQuery {
    let mut narrowed = query.clone();
    match *extra {
        Constraint::Size(size) => {
            if narrowed.size.is_none() {
                narrowed.size = Some(size);
            }
        }
        Constraint::Engine(engine) => narrowed.add_engine(engine),
        Constraint::Weapon(weapon) => narrowed.add_weapon(weapon),
        Constraint::Crew(crew) => {
            if narrowed.crew.is_none() {
                narrowed.crew = Some(crew);
            }
        }
    }
    narrowed
}

proptest! {
    #[test]
    fn re_query_is_idempotent(query in arb_query()) {
        let catalog = Catalog::builtin();
        prop_assert_eq!(catalog.find_matches(&query), catalog.find_matches(&query));
    }

    #[test]
    fn narrowing_is_monotonic(query in arb_query(), extra in arb_constraint()) {
        let catalog = Catalog::builtin();
        let before: Vec<usize> = catalog
            .find_matches(&query)
            .iter()
            .map(|m| m.id)
            .collect();
        let after = catalog.find_matches(&tighten(&query, &extra));
        for m in &after {
            prop_assert!(before.contains(&m.id));
        }
    }

    #[test]
    fn result_order_follows_catalog_order(query in arb_query()) {
        let catalog = Catalog::builtin();
        let ids: Vec<usize> = catalog
            .find_matches(&query)
            .iter()
            .map(|m| m.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);
    }

    #[test]
    fn single_engine_query_selects_exactly_the_supersets(engine in select(&Engine::ALL[..])) {
        let catalog = Catalog::builtin();
        let mut query = ShipQuery::new();
        query.add_engine(engine);
        let matched: Vec<usize> = catalog
            .find_matches(&query)
            .iter()
            .map(|m| m.id)
            .collect();
        for (id, ship) in catalog.iter().enumerate() {
            prop_assert_eq!(matched.contains(&id), ship.engines.contains(&engine));
        }
    }
}
