//! Seeded random edits, undone and redone in full.

use bigred_change::{Change, ChangeFactory, ChangeGroup};
use bigred_core::{ControlKind, NamePolicy, NamespaceKind, ObjectId, ObjectKind, PropertyValue, Rectangle, Value};
use bigred_graph::{Model, View};
use bigred_session::{ChangeExecutor, Session};
use bigred_transaction::{EngineConfig, ExecutorManager};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const KINDS: [ObjectKind; 11] = [
    ObjectKind::Bigraph,
    ObjectKind::Root,
    ObjectKind::Node,
    ObjectKind::Site,
    ObjectKind::Edge,
    ObjectKind::OuterName,
    ObjectKind::InnerName,
    ObjectKind::Port,
    ObjectKind::Signature,
    ObjectKind::Control,
    ObjectKind::PortSpec,
];

const NAMESPACES: [NamespaceKind; 7] = [
    NamespaceKind::Root,
    NamespaceKind::Site,
    NamespaceKind::Node,
    NamespaceKind::Link,
    NamespaceKind::InnerName,
    NamespaceKind::Control,
    NamespaceKind::PortSpec,
];

/// Part of the bigraph or the signature, as opposed to merely allocated.
fn is_live(view: View<'_>, id: ObjectId) -> bool {
    match view.kind(id) {
        Some(ObjectKind::Bigraph | ObjectKind::Signature) => true,
        Some(ObjectKind::Control) => view.signature_of(id).is_some(),
        Some(ObjectKind::PortSpec) => view
            .control_of(id)
            .is_some_and(|control| view.signature_of(control).is_some()),
        Some(_) => view.bigraph_of(id).is_some(),
        None => false,
    }
}

/// Every set property of every live object, and every namespace's names.
///
/// Empty lists read the same as unset ones.
fn snapshot(view: View<'_>) -> BTreeMap<(ObjectId, String), String> {
    let model = view.model();
    let mut state = BTreeMap::new();
    for kind in KINDS {
        for id in model.objects_of_kind(kind) {
            if !is_live(view, id) {
                continue;
            }
            let Some(object) = model.object(id) else {
                continue;
            };
            for (property, value) in object.properties() {
                if matches!(value, PropertyValue::Objects(list) if list.is_empty()) {
                    continue;
                }
                state.insert((id, property.to_string()), format!("{:?}", value));
            }
            for namespace in NAMESPACES {
                let names = view.names(id, namespace);
                if !names.is_empty() {
                    state.insert((id, format!("names({})", namespace)), format!("{:?}", names));
                }
            }
        }
    }
    state
}

fn attached(view: View<'_>, kind: ObjectKind) -> Vec<ObjectId> {
    view.model()
        .objects_of_kind(kind)
        .into_iter()
        .filter(|id| view.bigraph_of(*id).is_some() && view.parent(*id).is_some())
        .collect()
}

/// A model whose signature has one control, `Agent`, with a port and a
/// parameter policy.
fn seeded_model() -> (Model, ObjectId) {
    let mut model = Model::new();
    let control = model.create_control();
    let spec = model.create_port_spec();
    let mut setup: Change = ChangeGroup::new()
        .with(Change::add_control(model.signature(), control, "Agent"))
        .with(Change::control_kind(control, ControlKind::Active))
        .with(Change::parameter_policy(control, Some(NamePolicy::Long)))
        .with(Change::add_port(control, spec, "p"))
        .into();
    ExecutorManager::default()
        .try_apply_change(&mut model, &mut setup)
        .unwrap();
    (model, control)
}

/// A random change; some of them will be rejected.
fn random_change(session: &mut Session, control: ObjectId, rng: &mut StdRng) -> Option<Change> {
    let bigraph = session.model().bigraph();
    let view = session.view();
    let roots = attached(view, ObjectKind::Root);
    let nodes = attached(view, ObjectKind::Node);
    let sites = attached(view, ObjectKind::Site);
    let outers = attached(view, ObjectKind::OuterName);
    let containers: Vec<ObjectId> = roots.iter().chain(&nodes).copied().collect();
    let places: Vec<ObjectId> = containers.iter().chain(&sites).copied().collect();
    let points: Vec<ObjectId> = attached(view, ObjectKind::InnerName)
        .into_iter()
        .chain(nodes.iter().flat_map(|node| view.ports(*node)))
        .collect();

    match rng.gen_range(0..14) {
        0 => {
            let root = session.model_mut().create_root();
            session.model().change_add_child_auto(bigraph, root)
        }
        1 => {
            let parent = *containers.choose(rng)?;
            let site = session.model_mut().create_site();
            session.model().change_add_child_auto(parent, site)
        }
        2 => {
            let root = *roots.choose(rng)?;
            Some(Change::name(root, rng.gen_range(0..12).to_string()))
        }
        3 => {
            let place = *places.choose(rng)?;
            Some(session.model().change_remove_tree(place))
        }
        4 => {
            let outer = session.model_mut().create_outer_name();
            session.model().change_add_child_auto(bigraph, outer)
        }
        5 => {
            let inner = session.model_mut().create_inner_name();
            session.model().change_add_child_auto(bigraph, inner)
        }
        6 => {
            let point = *points.choose(rng)?;
            match session.model().change_disconnect(point) {
                Some(change) if rng.gen_bool(0.5) => Some(change),
                _ => Some(Change::connect(point, *outers.choose(rng)?)),
            }
        }
        7 => {
            let parent = *containers.choose(rng)?;
            let node = session.model_mut().create_node(control).ok()?;
            session.model().change_add_child_auto(parent, node)
        }
        8 => {
            let place = *places.choose(rng)?;
            let layout = Rectangle::new(
                rng.gen_range(0..50),
                rng.gen_range(0..50),
                rng.gen_range(0..40),
                rng.gen_range(0..40),
            );
            Some(Change::layout(place, layout))
        }
        9 => {
            let node = *nodes.choose(rng)?;
            let value = rng.gen_range(-3..20).to_string();
            Some(Change::parameter(node, rng.gen_bool(0.8).then_some(value.as_str())))
        }
        10 => {
            let target = *places.choose(rng)?;
            let key = *["colour", "comment"].choose(rng)?;
            let value = rng.gen_bool(0.7).then(|| Value::Int(rng.gen_range(0..100)));
            Some(Change::extended_data(target, key, value))
        }
        11 => {
            let kind = *[ControlKind::Atomic, ControlKind::Active, ControlKind::Passive].choose(rng)?;
            Some(Change::control_kind(control, kind))
        }
        12 => {
            let site = *sites.choose(rng)?;
            let alias = rng.gen_range(0..5).to_string();
            Some(Change::alias(site, rng.gen_bool(0.7).then_some(alias.as_str())))
        }
        _ => {
            let spec = session.model_mut().create_port_spec();
            Some(Change::add_port(control, spec, format!("q{}", rng.gen_range(0..4))))
        }
    }
}

#[test]
fn test_random_edits_round_trip_through_history() {
    // GIVEN
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let (model, control) = seeded_model();
    let config = EngineConfig::default().with_history_limit(None);
    let mut session = Session::with_model(1, model, config);
    let initial = snapshot(session.view());

    // WHEN
    let mut committed = 0;
    for _ in 0..400 {
        if let Some(mut change) = random_change(&mut session, control, &mut rng) {
            if session.try_apply_change(&mut change).is_ok() {
                committed += 1;
            }
        }
    }
    let edited = snapshot(session.view());

    let mut undone = 0;
    while session.can_undo() {
        session.undo().unwrap();
        undone += 1;
    }
    let rewound = snapshot(session.view());

    while session.can_redo() {
        session.redo().unwrap();
    }

    // THEN
    assert!(committed > 0);
    assert_eq!(undone, committed);
    assert_eq!(rewound, initial);
    assert_eq!(snapshot(session.view()), edited);
}

#[test]
fn test_each_edit_undoes_to_the_state_before_it() {
    // GIVEN
    let mut rng = StdRng::seed_from_u64(0xed17);
    let (model, control) = seeded_model();
    let mut session = Session::with_model(1, model, EngineConfig::default());

    for _ in 0..200 {
        let Some(mut change) = random_change(&mut session, control, &mut rng) else {
            continue;
        };
        let before = snapshot(session.view());

        // WHEN
        if session.try_apply_change(&mut change).is_err() {
            // THEN - a rejection leaves everything as it was
            assert_eq!(snapshot(session.view()), before);
            continue;
        }
        let after = snapshot(session.view());
        session.undo().unwrap();

        // THEN
        assert_eq!(snapshot(session.view()), before);
        session.redo().unwrap();
        assert_eq!(snapshot(session.view()), after);
    }
}
