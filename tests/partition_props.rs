use proptest::prelude::*;
use slotting::{Node, classify};

use crate::common::utils::{Kit, key_of, keyed, keys, kit};

mod common;

// =========================================================================
// Generated child sequences: every node carries a unique key so order
// and placement can be checked after classification.
// =========================================================================

#[derive(Debug, Clone, Copy)]
enum Pick {
    Header,
    Item,
    Icon,
    Other,
    Falsy,
}

fn pick() -> impl Strategy<Value = Pick> {
    prop_oneof![
        Just(Pick::Header),
        Just(Pick::Item),
        Just(Pick::Icon),
        Just(Pick::Other),
        Just(Pick::Falsy),
    ]
}

/// Top-level entries are either a bare node or a fragment of nodes.
fn layout() -> impl Strategy<Value = Vec<Vec<Pick>>> {
    prop::collection::vec(prop::collection::vec(pick(), 1..4), 0..12)
}

fn build(kit: &Kit, groups: &[Vec<Pick>]) -> (Vec<Node>, Vec<(Pick, String)>) {
    let mut input = Vec::new();
    let mut flat = Vec::new();
    let mut n = 0;

    let mut make = |p: Pick, flat: &mut Vec<(Pick, String)>| {
        n += 1;
        let key = format!("k{}", n);
        let node = match p {
            Pick::Header => keyed(&kit.header, &key),
            Pick::Item => keyed(&kit.item, &key),
            Pick::Icon => keyed(&kit.icon, &key),
            Pick::Other => keyed(&kit.other, &key),
            Pick::Falsy => Node::Empty,
        };
        if !matches!(p, Pick::Falsy) {
            flat.push((p, key));
        }
        node
    };

    for group in groups {
        if group.len() == 1 {
            input.push(make(group[0], &mut flat));
        } else {
            let inner = group.iter().map(|p| make(*p, &mut flat)).collect::<Vec<_>>();
            input.push(Node::fragment(inner));
        }
    }

    (input, flat)
}

fn keys_where(flat: &[(Pick, String)], f: impl Fn(Pick) -> bool) -> Vec<String> {
    flat.iter()
        .filter(|(p, _)| f(*p))
        .map(|(_, k)| k.clone())
        .collect()
}

proptest! {
    #[test]
    fn partition_is_total_and_disjoint(groups in layout()) {
        let kit = kit();
        let (input, flat) = build(&kit, &groups);

        let namespaced = flat.iter().filter(|(p, _)| matches!(p, Pick::Icon)).count();
        let headers = flat.iter().filter(|(p, _)| matches!(p, Pick::Header)).count();
        let result = classify(input, &kit.schema);

        // Earlier header duplicates are dropped, only the last survives
        let dropped_headers = headers.saturating_sub(1);
        prop_assert_eq!(result.node_count() + namespaced + dropped_headers, flat.len());
    }

    #[test]
    fn order_is_preserved(groups in layout()) {
        let kit = kit();
        let (input, flat) = build(&kit, &groups);
        let result = classify(input, &kit.schema);

        let expected_items = keys_where(&flat, |p| matches!(p, Pick::Item));
        let expected_rest = keys_where(&flat, |p| matches!(p, Pick::Other));
        let last_header = keys_where(&flat, |p| matches!(p, Pick::Header)).pop();

        prop_assert_eq!(keys(result.many("items").unwrap()), expected_items);
        prop_assert_eq!(keys(&result.children), expected_rest);
        prop_assert_eq!(result.one("header").and_then(key_of).map(str::to_string), last_header);
        prop_assert!(!result.slots.contains_key("icons"));
    }
}
