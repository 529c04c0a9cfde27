// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use colloquy_core::{collect_events, Event, Node, NodeId, TypedEvent, Value};

#[test]
fn dispatch_order_is_int_text_bool_then_plain() {
    let mut n = Node::new(NodeId(1));
    n.events.push(Event::new("plain_a"));
    n.events.push(Event::new("plain_b"));
    n.int_events.push(TypedEvent::new("int_a", 1));
    n.int_events.push(TypedEvent::new("int_b", 2));
    n.text_events.push(TypedEvent::new("text_a", String::from("x")));
    n.bool_events.push(TypedEvent::new("bool_a", true));

    let emissions = collect_events(&n);
    let keys: Vec<&str> = emissions.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["int_a", "int_b", "text_a", "bool_a", "plain_a", "plain_b"]
    );
    assert_eq!(emissions.len(), n.event_count());
}

#[test]
fn emissions_carry_typed_parameters() {
    let mut n = Node::new(NodeId(1));
    n.int_events.push(TypedEvent::new("pay", 10));
    n.text_events.push(TypedEvent::new("say", String::from("halt")));
    n.bool_events.push(TypedEvent::new("lock", true));
    n.events.push(Event::new("gate_refused"));

    let emissions = collect_events(&n);
    assert_eq!(emissions[0].param, Some(Value::Int(10)));
    assert_eq!(emissions[1].param, Some(Value::Text(String::from("halt"))));
    assert_eq!(emissions[2].param, Some(Value::Bool(true)));
    assert_eq!(emissions[3].param, None);
}

#[test]
fn duplicate_keys_are_preserved() {
    // The engine never deduplicates; dispatch fan-out is the host's call.
    let mut n = Node::new(NodeId(1));
    n.events.push(Event::new("chime"));
    n.events.push(Event::new("chime"));
    n.int_events.push(TypedEvent::new("chime", 3));

    let emissions = collect_events(&n);
    assert_eq!(emissions.len(), 3);
    assert!(emissions.iter().all(|e| e.key == "chime"));
}

#[test]
fn empty_node_emits_nothing() {
    assert!(collect_events(&Node::new(NodeId(1))).is_empty());
}
