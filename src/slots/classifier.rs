use crate::node::node_model::Children;
use crate::node::normalize::prepare_children;
use crate::schema::identity::{IdentityLookup, SlotMode};
use crate::schema::schema_model::SlotSchema;
use crate::slots::slots_model::{Classification, SlotValue};

/// Sort `children` into the slots declared by `schema`.
///
/// Falsy placeholders are dropped and top-level fragments inlined one
/// level before matching. Elements whose component has no slot stay in
/// `children` in input order. A single slot keeps its last match;
/// namespaced matches are removed without being reported.
pub fn classify(children: impl Into<Children>, schema: &SlotSchema) -> Classification {
    let lookup = IdentityLookup::from_schema(schema);
    let mut slots = lookup.seed();
    let mut leftovers = Vec::new();
    let mut matched = 0usize;
    let mut namespaced = 0usize;

    for node in prepare_children(children.into()) {
        let target = node.component().and_then(|id| lookup.target(id));

        let Some(target) = target else {
            leftovers.push(node);
            continue;
        };

        match target.mode {
            SlotMode::Single => {
                matched += 1;
                if slots
                    .insert(target.slot.to_string(), SlotValue::One(node))
                    .is_some()
                {
                    log::debug!("slot '{}' matched again, keeping the later child", target.slot);
                }
            }
            SlotMode::Repeatable => {
                matched += 1;
                match slots.get_mut(target.slot) {
                    Some(SlotValue::Many(nodes)) => nodes.push(node),
                    _ => {
                        // seed() creates every repeatable slot up front
                        debug_assert!(false, "repeatable slot '{}' was not seeded", target.slot);
                        log::warn!("repeatable slot '{}' missing, child dropped", target.slot);
                    }
                }
            }
            SlotMode::Namespaced => namespaced += 1,
        }
    }

    log::trace!(
        "classified children: {} matched, {} leftover, {} namespaced dropped",
        matched,
        leftovers.len(),
        namespaced
    );

    Classification {
        slots,
        children: leftovers,
    }
}

