#![no_main]

use arbitrary::Arbitrary;
use growbuf::{GrowBuf, Seq};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Push(u8),
    Extend([u8; 7], u8),
    ReserveExact(u16),
    Truncate(u16),
    Clear,
    Freeze,
}

#[derive(Arbitrary, Debug)]
struct Plan {
    initial_capacity: u16,
    ops: Vec<Op>,
}

/// The capacity an append reaching `needed` elements must end at, given the
/// capacity it started from.
fn grown_capacity(cap: usize, needed: usize) -> usize {
    if needed <= cap {
        cap
    } else {
        needed.max(if cap == 0 { 1 } else { cap * 2 })
    }
}

fuzz_target!(|plan: Plan| {
    let initial = usize::from(plan.initial_capacity);
    let mut buf = GrowBuf::with_capacity(initial).expect("allocation");
    assert_eq!(buf.capacity(), initial);

    // Differential model: a plain vector tracks the expected contents while
    // expected_cap tracks the policy arithmetic.
    let mut model: Vec<u8> = Vec::new();
    let mut expected_cap = initial;
    let mut frozen: Vec<(Seq<u8>, Vec<u8>)> = Vec::new();

    for op in plan.ops {
        match op {
            Op::Push(byte) => {
                expected_cap = grown_capacity(expected_cap, model.len() + 1);
                buf.push(byte).expect("allocation");
                model.push(byte);
            }
            Op::Extend(bytes, take) => {
                let chunk = &bytes[..usize::from(take) % (bytes.len() + 1)];
                if !chunk.is_empty() {
                    expected_cap = grown_capacity(expected_cap, model.len() + chunk.len());
                }
                buf.extend_from_slice(chunk).expect("allocation");
                model.extend_from_slice(chunk);
            }
            Op::ReserveExact(additional) => {
                let additional = usize::from(additional);
                if model.len() + additional > expected_cap {
                    expected_cap = model.len() + additional;
                }
                buf.reserve_exact(additional).expect("allocation");
            }
            Op::Truncate(len) => {
                let len = usize::from(len);
                buf.truncate(len);
                model.truncate(len);
            }
            Op::Clear => {
                buf.clear();
                model.clear();
            }
            Op::Freeze => {
                frozen.push((buf.freeze(), model.clone()));
            }
        }

        buf.check_invariants();
        assert_eq!(buf.as_slice(), model.as_slice());
        assert_eq!(buf.len(), model.len());
        assert_eq!(buf.capacity(), expected_cap);
    }

    // Sequences frozen along the way must still hold the contents from
    // their freeze point, untouched by later operations.
    for (seq, contents) in &frozen {
        assert_eq!(seq.as_slice(), contents.as_slice());
    }

    let final_seq = buf.into_seq();
    assert_eq!(final_seq.as_slice(), model.as_slice());
});
