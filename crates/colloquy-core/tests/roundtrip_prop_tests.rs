// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use colloquy_core::{decode_memory, encode_memory, MemoryStore};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum SetOp {
    Int(String, i64),
    Text(String, String),
    Bool(String, bool),
}

fn set_op() -> impl Strategy<Value = SetOp> {
    let key = "[a-z_]{1,8}";
    prop_oneof![
        (key, any::<i64>()).prop_map(|(k, v)| SetOp::Int(k, v)),
        (key, "[ -~]{0,12}").prop_map(|(k, v)| SetOp::Text(k, v)),
        (key, any::<bool>()).prop_map(|(k, v)| SetOp::Bool(k, v)),
    ]
}

proptest! {
    // Round-trip law: any sequence of setter calls survives
    // serialize→deserialize with identical subsequent reads.
    #[test]
    fn set_sequences_survive_round_trip(ops in proptest::collection::vec(set_op(), 0..48)) {
        let mut store = MemoryStore::new();
        for op in &ops {
            match op {
                SetOp::Int(k, v) => store.set_int(k.clone(), *v),
                SetOp::Text(k, v) => store.set_text(k.clone(), v.clone()),
                SetOp::Bool(k, v) => store.set_bool(k.clone(), *v),
            }
        }

        let doc = encode_memory(&store).expect("encode");
        let restored = decode_memory(&doc).expect("decode");
        prop_assert_eq!(&restored, &store);

        for op in &ops {
            match op {
                SetOp::Int(k, _) => prop_assert_eq!(restored.get_int(k), store.get_int(k)),
                SetOp::Text(k, _) => prop_assert_eq!(restored.get_text(k), store.get_text(k)),
                SetOp::Bool(k, _) => prop_assert_eq!(restored.get_bool(k), store.get_bool(k)),
            }
        }
    }

    // Reproducibility: equal stores produce byte-identical documents.
    #[test]
    fn equal_stores_encode_identically(ops in proptest::collection::vec(set_op(), 0..32)) {
        let mut a = MemoryStore::new();
        let mut b = MemoryStore::new();
        for op in &ops {
            for store in [&mut a, &mut b] {
                match op {
                    SetOp::Int(k, v) => store.set_int(k.clone(), *v),
                    SetOp::Text(k, v) => store.set_text(k.clone(), v.clone()),
                    SetOp::Bool(k, v) => store.set_bool(k.clone(), *v),
                }
            }
        }
        prop_assert_eq!(encode_memory(&a).expect("encode"), encode_memory(&b).expect("encode"));
    }
}
