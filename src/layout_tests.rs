//! Size guarantees for every storage representation.

use std::{mem, num::NonZeroU64};

use crate::{
    marker_type::Unit, MutOpt, PackedOpt, RefOpt, SlotOpt, SlotRes, UniformRes, UnitOpt,
};

#[test]
fn reference_options_are_one_pointer() {
    assert_eq!(
        mem::size_of::<RefOpt<'_, String>>(),
        mem::size_of::<&String>(),
    );
    assert_eq!(
        mem::size_of::<MutOpt<'_, String>>(),
        mem::size_of::<&mut String>(),
    );
    assert_eq!(
        mem::size_of::<Option<RefOpt<'_, u8>>>(),
        mem::size_of::<RefOpt<'_, u8>>() + mem::size_of::<usize>(),
    );
}

#[test]
fn packed_nonzero_options_are_primitive_sized() {
    assert_eq!(
        mem::size_of::<PackedOpt<NonZeroU64>>(),
        mem::size_of::<u64>(),
    );
}

#[test]
fn empty_payload_options_are_one_byte() {
    assert_eq!(mem::size_of::<UnitOpt>(), 1);
    // Without the flag-only representation the same payload costs a full
    // slot struct.
    assert_eq!(mem::size_of::<SlotOpt<Unit>>(), 1);
}

#[test]
fn slot_options_pay_one_flag_plus_padding() {
    assert_eq!(
        mem::size_of::<SlotOpt<u64>>(),
        mem::size_of::<u64>() + mem::align_of::<u64>(),
    );
    assert_eq!(mem::size_of::<SlotOpt<u8>>(), 2);
}

#[test]
fn two_slot_results_are_the_sum_of_both_payloads() {
    assert!(mem::size_of::<SlotRes<u64, u32>>() >= mem::size_of::<u64>() + mem::size_of::<u32>());
    assert_eq!(mem::size_of::<SlotRes<Unit, Unit>>(), 1);
}

#[test]
fn uniform_results_hold_a_single_payload() {
    assert_eq!(
        mem::size_of::<UniformRes<u32>>(),
        mem::size_of::<u32>() + mem::align_of::<u32>(),
    );
    assert!(mem::size_of::<UniformRes<u64>>() < mem::size_of::<SlotRes<u64, u64>>());
}
