//! Replaying reaction rules onto other agents.

use bigred_change::ChangeDescriptor;
use bigred_graph::{Identifier, Model};
use bigred_rule::ReactionRule;
use bigred_session::Session;
use bigred_transaction::{EngineConfig, ExecutorManager};
use pretty_assertions::assert_eq;

fn add(parent: Identifier, child: Identifier) -> ChangeDescriptor {
    ChangeDescriptor::AddChild {
        parent,
        child,
        position: None,
    }
}

fn agent_control() -> ChangeDescriptor {
    ChangeDescriptor::AddControl {
        control: Identifier::control("Agent"),
    }
}

fn node(name: &str) -> Identifier {
    Identifier::node(name, "Agent")
}

/// Redex: root 0 holding node a.
fn rule() -> (ReactionRule, ExecutorManager) {
    let executor = ExecutorManager::default();
    let mut redex = Model::new();
    executor
        .try_apply_descriptor(
            &mut redex,
            &ChangeDescriptor::group([
                agent_control(),
                add(Identifier::Bigraph, Identifier::root("0")),
                add(Identifier::root("0"), node("a")),
            ]),
        )
        .unwrap();

    let mut rule = ReactionRule::new(redex);
    rule.add_change(&executor, add(node("a"), Identifier::site("0")))
        .unwrap();
    rule.add_change(
        &executor,
        ChangeDescriptor::Name {
            target: node("a"),
            name: "b".to_string(),
        },
    )
    .unwrap();
    (rule, executor)
}

#[test]
fn test_rule_replays_onto_a_different_model() {
    // GIVEN - an agent whose object ids don't line up with the redex
    let (rule, _) = rule();
    let mut session = Session::new(5, EngineConfig::default());
    session.model_mut().create_edge();
    session
        .try_apply_descriptor(&ChangeDescriptor::group([
            add(Identifier::Bigraph, Identifier::root("0")),
            add(Identifier::Bigraph, Identifier::root("1")),
            agent_control(),
            add(Identifier::root("1"), node("a")),
        ]))
        .unwrap();

    // WHEN
    let applied = rule.apply_to(&mut session).unwrap();

    // THEN
    let view = session.view();
    let b = node("b").resolve(view).unwrap();
    let site = Identifier::site("0").resolve(view).unwrap();
    assert_eq!(applied.leaf_count(), 2);
    assert_eq!(view.parent(site), Some(b));
    assert_eq!(view.parent(b), Identifier::root("1").resolve(view));
}

#[test]
fn test_replayed_rule_undoes_in_one_step() {
    // GIVEN
    let (rule, executor) = rule();
    let mut session = Session::with_model(6, rule.redex().clone(), EngineConfig::default());
    rule.apply_to(&mut session).unwrap();

    // WHEN
    session.undo().unwrap();

    // THEN
    let view = session.view();
    assert!(node("a").resolve(view).is_some());
    assert_eq!(Identifier::site("0").resolve(view), None);
    let reactum = rule.reactum(&executor).unwrap();
    assert!(node("b").resolve(reactum.view()).is_some());
}
