use async_trait::async_trait;
use shipfinder_catalog::ShipMatch;
use shipfinder_protocol::{ChoiceOption, FieldPrompt, SelectionItem};

use crate::error::Result;
use crate::field::{FieldAnswer, FieldSpec, FIELDS};
use crate::session::{NarrowingSession, SessionOutcome, SubmitOutcome};

/// Transport boundary of the narrowing flow. Implementations host the actual
/// conversation (terminal, chat channel, test script); the flow only ever
/// sees raw answers coming back.
#[async_trait]
pub trait Prompter {
    /// Present a constrained field question; returns the raw answer.
    async fn ask_choice(&mut self, prompt: &FieldPrompt) -> anyhow::Result<String>;

    /// Present a free-form question; returns the raw answer.
    async fn ask_open(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Present the final pick-one-of-many resolution; returns the raw pick.
    async fn present_selection(&mut self, items: &[SelectionItem]) -> anyhow::Result<String>;

    /// One-way informational message.
    async fn notify(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Drive a session to a terminal state: walk the field table, re-prompting a
/// field while its answer is rejected, then resolve the outcome. Returns the
/// chosen record, or `None` when nothing matched the accumulated criteria.
pub async fn run_session<P>(
    mut session: NarrowingSession,
    prompter: &mut P,
) -> Result<Option<ShipMatch>>
where
    P: Prompter + Send,
{
    prompter.notify("Greetings!").await?;

    for spec in &FIELDS {
        // Activation is re-checked before every prompt: a rejected answer
        // leaves the field active, an accepted one may deactivate the rest.
        while session.is_active(spec.id) {
            let options = session
                .options_for(spec.id)
                .unwrap_or_else(|| spec.id.default_options());
            let raw = if options.is_empty() {
                prompter.ask_open(spec.prompt).await?
            } else {
                prompter.ask_choice(&field_prompt(spec, &options)).await?
            };
            match session.submit(spec.id, &raw) {
                SubmitOutcome::Accepted { feedback, .. } => {
                    if let Some(feedback) = feedback {
                        prompter.notify(&feedback).await?;
                    }
                    break;
                }
                SubmitOutcome::Rejected { feedback } => {
                    prompter.notify(&feedback).await?;
                }
            }
        }
    }

    match session.complete() {
        SessionOutcome::Resolved(chosen) => {
            prompter
                .notify(&format!("You've chosen \"{}\", well done!", chosen.ship.name))
                .await?;
            Ok(Some(chosen))
        }
        SessionOutcome::Choosing(resolver) => {
            let items = resolver.choices();
            loop {
                let raw = prompter.present_selection(&items).await?;
                match resolver.resolve(&raw) {
                    Some(chosen) => {
                        prompter
                            .notify(&format!("\"{}\" it is, great choice!", chosen.ship.name))
                            .await?;
                        return Ok(Some(chosen.clone()));
                    }
                    None => {
                        prompter
                            .notify(&format!(
                                "\"{}\" is not a valid option, please try again",
                                raw.trim()
                            ))
                            .await?;
                    }
                }
            }
        }
        SessionOutcome::Failed => {
            prompter
                .notify("No spaceships found with the given criteria")
                .await?;
            Ok(None)
        }
    }
}

fn field_prompt(spec: &FieldSpec, options: &[FieldAnswer]) -> FieldPrompt {
    FieldPrompt {
        field_id: spec.id.name().to_string(),
        text: spec.prompt.to_string(),
        options: options
            .iter()
            .map(|o| ChoiceOption {
                value: o.key().to_string(),
                label: o.label().to_string(),
            })
            .collect(),
        allow_multiple: spec.multi_valued,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowConfig;
    use pretty_assertions::assert_eq;
    use shipfinder_catalog::{Catalog, Crew, Engine, ShipQuery, Size, Weapon};
    use std::collections::VecDeque;
    use std::sync::Arc;

    struct ScriptedPrompter {
        answers: VecDeque<&'static str>,
        notices: Vec<String>,
        field_prompts: Vec<FieldPrompt>,
        selections_presented: usize,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                notices: Vec::new(),
                field_prompts: Vec::new(),
                selections_presented: 0,
            }
        }

        fn next_answer(&mut self) -> String {
            self.answers
                .pop_front()
                .expect("script ran out of answers")
                .to_string()
        }
    }

    #[async_trait]
    impl Prompter for ScriptedPrompter {
        async fn ask_choice(&mut self, prompt: &FieldPrompt) -> anyhow::Result<String> {
            self.field_prompts.push(prompt.clone());
            Ok(self.next_answer())
        }

        async fn ask_open(&mut self, _prompt: &str) -> anyhow::Result<String> {
            Ok(self.next_answer())
        }

        async fn present_selection(
            &mut self,
            _items: &[SelectionItem],
        ) -> anyhow::Result<String> {
            self.selections_presented += 1;
            Ok(self.next_answer())
        }

        async fn notify(&mut self, text: &str) -> anyhow::Result<()> {
            self.notices.push(text.to_string());
            Ok(())
        }
    }

    fn new_session() -> NarrowingSession {
        NarrowingSession::new(Arc::new(Catalog::builtin()), FlowConfig::default())
    }

    #[tokio::test]
    async fn small_impulse_resolves_without_further_questions() {
        let mut prompter = ScriptedPrompter::new(&["small", "impulse"]);
        let found = run_session(new_session(), &mut prompter).await.unwrap();

        let found = found.expect("expected a resolved ship");
        assert_eq!(found.ship.name, "Federation attack fighter");

        // Only size and engines were ever asked.
        let asked: Vec<&str> = prompter
            .field_prompts
            .iter()
            .map(|p| p.field_id.as_str())
            .collect();
        assert_eq!(asked, vec!["size", "engines"]);

        // The first question ran before any search, so it offered the full
        // default option set; the second was narrowed to the small ships.
        assert_eq!(prompter.field_prompts[0].options.len(), 3);
        let engine_values: Vec<&str> = prompter.field_prompts[1]
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(
            engine_values,
            vec![
                "impulse",
                "sublight",
                "hyper",
                "turbo-thrust",
                "faster-than-light"
            ]
        );

        assert_eq!(prompter.notices[0], "Greetings!");
        assert!(prompter
            .notices
            .iter()
            .any(|n| n == "Still 6 options matching your criteria. Let's get some more details!"));
        assert!(prompter
            .notices
            .iter()
            .any(|n| n == "You've chosen \"Federation attack fighter\", well done!"));
    }

    #[tokio::test]
    async fn rejected_answer_reprompts_the_same_field() {
        let mut prompter = ScriptedPrompter::new(&["gigantic", "small", "impulse"]);
        let found = run_session(new_session(), &mut prompter).await.unwrap();
        assert_eq!(found.unwrap().ship.name, "Federation attack fighter");

        let asked: Vec<&str> = prompter
            .field_prompts
            .iter()
            .map(|p| p.field_id.as_str())
            .collect();
        assert_eq!(asked, vec!["size", "size", "engines"]);
        assert!(prompter
            .notices
            .contains(&"\"gigantic\" is not a valid option".to_string()));
    }

    #[tokio::test]
    async fn narrowing_to_two_candidates_enters_the_choosing_loop() {
        // large -> warp -> photon torpedos -> hostile leaves the two Star
        // Trek warships; the first pick is not a presented option, the second
        // is a surrogate id.
        let mut prompter = ScriptedPrompter::new(&[
            "large",
            "warp",
            "photon torpedos",
            "hostile",
            "Enterprise (NX-01)",
            "5",
        ]);
        let found = run_session(new_session(), &mut prompter).await.unwrap();

        let found = found.expect("expected a picked ship");
        assert_eq!(found.ship.name, "IKS Toh'Kaht (Klingon attack cruiser)");
        assert_eq!(prompter.selections_presented, 2);
        assert!(prompter
            .notices
            .contains(&"\"Enterprise (NX-01)\" is not a valid option, please try again".to_string()));
        assert!(prompter.notices.iter().any(|n| n.ends_with("great choice!")));
    }

    #[tokio::test]
    async fn seeded_dead_end_fails_without_asking_anything() {
        let query = ShipQuery {
            crew: Some(Crew::Allied),
            engines: vec![Engine::FasterThanLight],
            ..ShipQuery::default()
        };
        let session = NarrowingSession::with_query(
            Arc::new(Catalog::builtin()),
            FlowConfig::default(),
            query,
        );
        let mut prompter = ScriptedPrompter::new(&[]);
        let found = run_session(session, &mut prompter).await.unwrap();

        assert!(found.is_none());
        assert!(prompter.field_prompts.is_empty());
        assert_eq!(
            prompter.notices.last().unwrap(),
            "No spaceships found with the given criteria"
        );
    }

    #[tokio::test]
    async fn seeded_large_photon_query_keeps_crew_question_active() {
        let query = ShipQuery {
            size: Some(Size::Large),
            weapons: vec![Weapon::PhotonTorpedo],
            ..ShipQuery::default()
        };
        let session = NarrowingSession::with_query(
            Arc::new(Catalog::builtin()),
            FlowConfig::default(),
            query,
        );
        // Engines and weapons still have two-plus distinct values among the
        // four candidates, so they are asked again before crew.
        let mut prompter =
            ScriptedPrompter::new(&["warp", "photon torpedos", "allied", "2"]);
        let found = run_session(session, &mut prompter).await.unwrap();

        let asked: Vec<&str> = prompter
            .field_prompts
            .iter()
            .map(|p| p.field_id.as_str())
            .collect();
        assert_eq!(asked, vec!["engines", "weapons", "crew"]);

        let crew_prompt = prompter.field_prompts.last().unwrap();
        let crew_values: Vec<&str> =
            crew_prompt.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(crew_values, vec!["allied", "hostile"]);

        assert_eq!(found.unwrap().ship.name, "Enterprise (NX-01)");
    }
}
