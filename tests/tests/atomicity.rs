//! Transactions commit as a whole or not at all.

use bigred_tests::prelude::*;

mod groups {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("groups", "atomicity.ops")
            .seed("seed_root.ops")
            // The first leaf is valid on its own but must not survive
            .step("add_root_then_duplicate", |a| {
                a.error(messages::NAMES_MUST_BE_UNIQUE)
                    .absent(Identifier::root("1"))
            })
            .step("add_root_with_site", |a| {
                a.leaves(2)
                    .child_of(Identifier::site("0"), Identifier::root("1"))
            })
            .step("validate_root", |a| a.leaves(0).absent(Identifier::root("2")))
    }

    #[test]
    fn test_groups_are_atomic() {
        scenario().run().unwrap();
    }
}

mod descriptors {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("descriptors", "atomicity.ops")
            .seed("seed_root.ops")
            .step("add_root_with_site", |a| a.leaves(2))
            .step("remove_absent_root", |a| a.error("root 7 didn't resolve"))
            .step("remove_site_twice", |a| {
                a.error("didn't resolve").exists(Identifier::site("0"))
            })
            .step("rename_then_use_old_name", |a| {
                a.error("root 1 didn't resolve")
                    .exists(Identifier::root("1"))
                    .absent(Identifier::root("3"))
            })
            .step("remove_site_from_wrong_parent", |a| {
                a.error("site 0 is not a child of root 0")
                    .child_of(Identifier::site("0"), Identifier::root("1"))
            })
    }

    #[test]
    fn test_descriptor_resolution_failures() {
        scenario().run().unwrap();
    }
}
