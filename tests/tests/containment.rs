//! Containment, atomic controls and removal order.

use bigred_tests::prelude::*;

fn token() -> Identifier {
    Identifier::node("t", "Token")
}

fn boxed() -> Identifier {
    Identifier::node("b", "Box")
}

mod atomic {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("atomic", "containment.ops")
            .seed("seed_root.ops")
            .seed("seed_containment.ops")
            .step("put_site_in_token", |a| {
                a.error("Token is an atomic control")
                    .absent(Identifier::site("0"))
            })
            .step("put_site_in_box", |a| {
                a.child_of(Identifier::site("0"), boxed())
            })
            .step("make_box_atomic", |a| {
                a.error("<Node b> has children, but Box is an atomic control")
            })
    }

    #[test]
    fn test_atomic_controls_admit_no_children() {
        scenario().run().unwrap();
    }
}

mod removal {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("removal", "containment.ops")
            .seed("seed_root.ops")
            .seed("seed_containment.ops")
            .step("put_site_in_box", |a| a.leaves(1))
            .step("remove_used_control", |a| {
                a.error("The control Token is still used by <Node t>")
            })
            .step("control_leaves_as_node_arrives", |a| {
                a.error("The control Spare is still used by <Node s>")
                    .absent(Identifier::control("Spare"))
                    .absent(Identifier::node("s", "Spare"))
            })
            .step("remove_root_with_children", |a| {
                a.error(messages::HAS_CHILDREN).exists(Identifier::root("0"))
            })
            .step("clear_root", |a| {
                a.leaves(4)
                    .absent(Identifier::root("0"))
                    .absent(token())
                    .absent(boxed())
            })
            .step("undo", |a| {
                a.child_of(token(), Identifier::root("0"))
                    .child_of(boxed(), Identifier::root("0"))
                    .child_of(Identifier::site("0"), boxed())
                    .can_redo(true)
            })
            .step("redo", |a| {
                a.absent(Identifier::root("0"))
                    .can_redo(false)
                    .can_undo(true)
            })
            .step("remove_unused_control", |a| {
                a.absent(Identifier::control("Token"))
            })
    }

    #[test]
    fn test_removal_requires_empty_containers() {
        scenario().run().unwrap();
    }
}
