//! Capacity behaviour: the doubling policy, preallocation, and the exact
//! sizes a buffer passes through while being filled.

use rstest::rstest;

use crate::ByteBuf;

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 4)]
#[case(4, 4)]
#[case(5, 8)]
#[case(6, 8)]
#[case(8, 8)]
#[case(9, 16)]
#[case(16, 16)]
#[case(17, 32)]
fn capacity_after_appends(#[case] appends: usize, #[case] expected: usize) {
    let mut buf = ByteBuf::new();
    for _ in 0..appends {
        buf.push(0xAB).unwrap();
    }
    assert_eq!(buf.len(), appends);
    assert_eq!(buf.capacity(), expected);
}

#[test]
fn first_append_allocates_capacity_one() {
    let mut buf = ByteBuf::new();
    assert_eq!(buf.capacity(), 0);

    buf.push(1).unwrap();
    assert_eq!((buf.len(), buf.capacity()), (1, 1));
}

#[test]
fn preallocated_buffer_never_regrows() {
    let mut buf = ByteBuf::with_capacity(100).unwrap();
    for n in 0u8..100 {
        buf.push(n).unwrap();
        assert_eq!(buf.capacity(), 100);
    }
    assert_eq!(buf.len(), 100);

    // The very next append is the first reallocation.
    buf.push(100).unwrap();
    assert_eq!(buf.capacity(), 200);
}

#[test]
fn two_phase_fill_with_exact_preallocation() {
    let (n, m) = (60, 40);

    let mut buf = ByteBuf::with_capacity(n + m).unwrap();
    for _ in 0..n {
        buf.push(b'x').unwrap();
    }
    assert_eq!(buf.capacity(), n + m);

    for _ in 0..m {
        buf.push(b'y').unwrap();
    }
    assert_eq!(buf.len(), n + m);
    assert_eq!(buf.capacity(), n + m);
}

#[test]
fn reserve_exact_mirrors_with_capacity() {
    let mut buf = ByteBuf::new();
    buf.push(b'a').unwrap();

    buf.reserve_exact(9).unwrap();
    assert_eq!(buf.capacity(), 10);

    for _ in 0..9 {
        buf.push(b'b').unwrap();
    }
    assert_eq!(buf.capacity(), 10);
}

#[test]
fn bulk_append_grows_straight_to_the_required_size() {
    let mut buf = ByteBuf::new();
    buf.extend_from_slice(&[0; 100]).unwrap();
    assert_eq!(buf.len(), 100);
    assert_eq!(buf.capacity(), 100);
}

#[test]
fn short_bulk_append_still_doubles() {
    let mut buf = ByteBuf::new();
    buf.extend_from_slice(&[0; 4]).unwrap();
    assert_eq!(buf.capacity(), 4);

    // One more byte fits in a doubling, so the policy doubles rather than
    // growing to 5.
    buf.extend_from_slice(&[0; 1]).unwrap();
    assert_eq!(buf.capacity(), 8);
}

#[test]
fn growth_is_decoupled_from_length() {
    let mut buf = ByteBuf::new();
    for _ in 0..5 {
        buf.push(0).unwrap();
    }
    assert_eq!((buf.len(), buf.capacity()), (5, 8));

    buf.truncate(1);
    assert_eq!((buf.len(), buf.capacity()), (1, 8));

    // Refilling the retained capacity allocates nothing further.
    for _ in 0..7 {
        buf.push(0).unwrap();
    }
    assert_eq!((buf.len(), buf.capacity()), (8, 8));
}
