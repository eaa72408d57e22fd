//! Heading hierarchy synthesis.
//!
//! Rebuilds the nesting implied by heading levels from a flat, ordered event
//! sequence. Document order is the only ordering signal: events are never
//! reordered by level.

use super::{HeadingEvent, HeadingNode};

/// Build a heading forest from a flat event sequence.
///
/// Single left-to-right pass over an explicit stack of open ancestors,
/// shallowest at the bottom. A new heading first closes every open heading
/// at its own level or deeper (equal levels become siblings, never
/// children), then attaches under whatever heading remains on top, or
/// becomes a forest root when none does. Intervening skipped levels get no
/// placeholders: a level-4 heading directly after a level-1 heading is
/// simply its child.
///
/// Total over any finite input. An empty sequence yields an empty forest.
pub fn build_outline(events: impl IntoIterator<Item = HeadingEvent>) -> Vec<HeadingNode> {
    let mut roots = Vec::new();
    // Open ancestors. A node owns its children by value, so it joins its
    // parent only once it is closed.
    let mut stack: Vec<HeadingNode> = Vec::new();

    for event in events {
        let node = HeadingNode {
            level: event.level,
            text: event.text,
            anchor: event.anchor,
            children: Vec::new(),
        };
        while stack.last().is_some_and(|open| open.level >= node.level) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(node);
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

/// Close the deepest open heading, attaching it to its parent or the roots.
fn close_top(stack: &mut Vec<HeadingNode>, roots: &mut Vec<HeadingNode>) {
    let Some(done) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some(parent) => parent.children.push(done),
        None => roots.push(done),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn event(level: u32, text: &str) -> HeadingEvent {
        HeadingEvent {
            level,
            text: text.to_string(),
            anchor: text.to_ascii_lowercase(),
        }
    }

    fn titles(nodes: &[HeadingNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.text.as_str()).collect()
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        assert!(build_outline(Vec::new()).is_empty());
    }

    #[test]
    fn first_event_becomes_root_regardless_of_level() {
        let forest = build_outline(vec![event(5, "Deep start")]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].level, 5);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn equal_levels_stay_flat() {
        let forest = build_outline(vec![event(2, "A"), event(2, "B"), event(2, "C")]);
        assert_eq!(titles(&forest), ["A", "B", "C"]);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn deeper_heading_nests() {
        let forest = build_outline(vec![event(1, "A"), event(2, "B")]);
        assert_eq!(forest.len(), 1);
        assert_eq!(titles(&forest[0].children), ["B"]);
    }

    #[test]
    fn level_jump_nests_without_placeholders() {
        let forest = build_outline(vec![event(1, "A"), event(4, "B")]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children[0].level, 4);
        assert!(forest[0].children[0].children.is_empty());
    }

    #[test]
    fn shallower_heading_opens_new_root() {
        let forest = build_outline(vec![event(3, "A"), event(1, "B")]);
        assert_eq!(titles(&forest), ["A", "B"]);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn skip_then_return_pops_past_the_jump() {
        // [1, 4, 2]: the level-2 heading pops the level-4 one and lands as
        // the level-1 root's second child.
        let forest = build_outline(vec![event(1, "A"), event(4, "B"), event(2, "C")]);
        assert_eq!(forest.len(), 1);
        assert_eq!(titles(&forest[0].children), ["B", "C"]);
        assert!(forest[0].children[0].children.is_empty());
        assert!(forest[0].children[1].children.is_empty());
    }

    #[test]
    fn document_scenario() {
        // A > (B > C), D
        let forest = build_outline(vec![
            event(1, "A"),
            event(2, "B"),
            event(3, "C"),
            event(2, "D"),
        ]);
        assert_eq!(titles(&forest), ["A"]);
        let a = &forest[0];
        assert_eq!(titles(&a.children), ["B", "D"]);
        assert_eq!(titles(&a.children[0].children), ["C"]);
        assert!(a.children[1].children.is_empty());
    }

    #[test]
    fn sibling_order_follows_document_order() {
        let forest = build_outline(vec![
            event(1, "A"),
            event(2, "B"),
            event(2, "C"),
            event(2, "D"),
        ]);
        assert_eq!(titles(&forest[0].children), ["B", "C", "D"]);
    }

    fn flatten<'a>(forest: &'a [HeadingNode], out: &mut Vec<&'a HeadingNode>) {
        for node in forest {
            out.push(node);
            flatten(&node.children, out);
        }
    }

    fn nests_strictly(forest: &[HeadingNode]) -> bool {
        forest.iter().all(|node| {
            node.children.iter().all(|child| child.level > node.level)
                && nests_strictly(&node.children)
        })
    }

    fn arbitrary_events(levels: &[u32]) -> Vec<HeadingEvent> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| HeadingEvent {
                level,
                text: format!("h{i}"),
                anchor: format!("a{i}"),
            })
            .collect()
    }

    proptest! {
        #[test]
        fn preorder_walk_matches_input(levels in prop::collection::vec(1u32..=8, 0..64)) {
            let events = arbitrary_events(&levels);
            let forest = build_outline(events.clone());
            let mut flat = Vec::new();
            flatten(&forest, &mut flat);
            prop_assert_eq!(flat.len(), events.len());
            for (node, event) in flat.iter().zip(&events) {
                prop_assert_eq!(node.level, event.level);
                prop_assert_eq!(&node.text, &event.text);
                prop_assert_eq!(&node.anchor, &event.anchor);
            }
        }

        #[test]
        fn children_always_deeper_than_parents(levels in prop::collection::vec(1u32..=8, 0..64)) {
            let forest = build_outline(arbitrary_events(&levels));
            prop_assert!(nests_strictly(&forest));
        }
    }
}
