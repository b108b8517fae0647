//! Name uniqueness and legality.

use bigred_tests::prelude::*;

mod roots {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("roots", "names.ops")
            .step("add_root", |a| a.leaves(1).exists(Identifier::root("0")))
            .step("add_duplicate_root", |a| a.error(messages::NAMES_MUST_BE_UNIQUE))
            .step("add_root_with_illegal_name", |a| {
                a.error("\"zero\" is not a valid name")
                    .absent(Identifier::root("zero"))
            })
            // Long names must already be in canonical form
            .step("add_root_with_padded_name", |a| a.error("is not a valid name"))
            .step("rename_root", |a| {
                a.leaves(1)
                    .exists(Identifier::root("1"))
                    .absent(Identifier::root("0"))
            })
            .step("reuse_freed_name", |a| a.exists(Identifier::root("0")))
            .step("swap_names", |a| {
                a.leaves(3)
                    .exists(Identifier::root("0"))
                    .exists(Identifier::root("1"))
                    .absent(Identifier::root("2"))
            })
    }

    #[test]
    fn test_root_names_unique_and_canonical() {
        scenario().run().unwrap();
    }
}

mod controls {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("controls", "names.ops")
            .step("add_control", |a| a.exists(Identifier::control("Agent")))
            .step("add_duplicate_control", |a| a.error(messages::NAMES_MUST_BE_UNIQUE))
            .step("add_control_with_space", |a| {
                a.error("is not a valid name")
                    .absent(Identifier::control("Secret Agent"))
            })
    }

    #[test]
    fn test_control_names_unique_and_legal() {
        scenario().run().unwrap();
    }
}
