//! Connecting points to links.

use bigred_tests::prelude::*;

fn inner() -> Identifier {
    Identifier::inner_name("i")
}

fn outer() -> Identifier {
    Identifier::outer_name("x")
}

mod connections {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("connections", "links.ops")
            .seed("seed_root.ops")
            .seed("seed_links.ops")
            .step("connect", |a| a.leaves(1).connected(inner(), outer()))
            .step("connect_again", |a| {
                a.error(messages::ALREADY_CONNECTED)
                    .connected(inner(), outer())
            })
            .step("remove_connected_link", |a| {
                a.error("still has points").exists(outer())
            })
            .step("remove_connected_point", |a| {
                a.error("must be disconnected first").exists(inner())
            })
            .step("disconnect", |a| a.disconnected(inner()))
            .step("disconnect_again", |a| a.error(messages::ALREADY_DISCONNECTED))
    }

    #[test]
    fn test_point_connects_at_most_once() {
        scenario().run().unwrap();
    }
}

mod edges {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("edges", "links.ops")
            .seed("seed_root.ops")
            .seed("seed_links.ops")
            .step("add_edge_under_root", |a| {
                a.error(messages::EDGES_IN_BIGRAPH)
                    .absent(Identifier::edge("e"))
            })
            .step("add_edge", |a| {
                a.child_of(Identifier::edge("e"), Identifier::Bigraph)
            })
            // Edges and outer names share one namespace
            .step("add_edge_named_like_outer_name", |a| {
                a.error(messages::NAMES_MUST_BE_UNIQUE)
            })
            .step("move_point_to_edge", |a| {
                a.leaves(3).connected(inner(), Identifier::edge("e"))
            })
    }

    #[test]
    fn test_edges_live_in_the_bigraph() {
        scenario().run().unwrap();
    }
}
