//! Six end-to-end program scenarios, driven through the public crate
//! API the way an embedder would.

use helix_vm::codon::Codon;
use helix_vm::error::{Fault, HaltReason};
use helix_vm::interpreter::Interpreter;
use helix_vm::io::{SliceInput, StringOutput};
use helix_vm::loader::load_str;
use helix_vm::strand::Strand;

fn run(src: &str, input: impl IntoIterator<Item = u8>) -> Result<(HaltReason, String), Fault> {
    let strand = load_str(src).expect("valid source");
    let mut vm = Interpreter::new(strand, SliceInput::new(input), StringOutput::default());
    let reason = vm.run()?;
    Ok((reason, vm.into_output().into_string()))
}

#[test]
fn scenario_1_halt_immediately() {
    let (reason, out) = run("ATG TGA", []).unwrap();
    assert_eq!(reason, HaltReason::Stop);
    assert_eq!(out, "");
}

#[test]
fn scenario_2_print_a() {
    let (reason, out) = run("ATG AAA AAA GTA TGA", []).unwrap();
    assert_eq!(reason, HaltReason::Stop);
    assert_eq!(out, "A");
}

#[test]
fn scenario_3_print_b_via_addi() {
    let (reason, out) = run("ATG AAA AAA AAT AAC GTA TGA", []).unwrap();
    assert_eq!(reason, HaltReason::Stop);
    assert_eq!(out, "B");
}

#[test]
fn scenario_4_mut_self_modifies_a_later_codon() {
    let err = run("ATG CAG AAT ACA GTA TGA", []).unwrap_err();
    assert!(matches!(err, Fault::UnknownOpcode { .. }));
}

#[test]
fn scenario_4_variant_mut_with_a_legitimate_opcode_executes_it() {
    // Same shape, but the replacement codon is TGA (STOP) instead of
    // the data codon ACA, so the mutated program halts cleanly.
    let (reason, out) = run("ATG CAG AAT TGA GTA", []).unwrap();
    assert_eq!(reason, HaltReason::Stop);
    assert_eq!(out, "");
}

#[test]
fn scenario_5_rev_is_an_involution_across_two_executions() {
    // A program that executes CCC twice over the same absolute block
    // (ip differs between the two occurrences, so the unsigned
    // start_off parameter differs too, but both point at the same
    // `[8, 11)` range): the block must be unchanged once both
    // reversals have completed.
    let u = |n: u8| Codon::from_unsigned(n);
    let atg = u(14); // ATG
    let ccc = u(21); // CCC (REV)
    let tga = u(56); // TGA (STOP)

    let codons = vec![
        atg,        // 0
        ccc,        // 1  ip=1, REV(start_off=7, length=3) -> [8,11)
        u(7),       // 2
        u(3),       // 3
        ccc,        // 4  ip=4, REV(start_off=4, length=3) -> [8,11)
        u(4),       // 5
        u(3),       // 6
        tga,        // 7
        u(10),      // 8  \
        u(20),      // 9   > the block under test
        u(30),      // 10 /
    ];
    let strand = Strand::new(codons);
    let mut vm = Interpreter::new(strand, SliceInput::new([]), StringOutput::default());
    assert_eq!(vm.run().unwrap(), HaltReason::Stop);

    assert_eq!(vm.strand().get(8).unwrap().to_unsigned(), 10);
    assert_eq!(vm.strand().get(9).unwrap().to_unsigned(), 20);
    assert_eq!(vm.strand().get(10).unwrap().to_unsigned(), 30);
}

#[test]
fn scenario_6_echo_one_char() {
    let (reason, out) = run("ATG GAT GTA TGA", [5]).unwrap();
    assert_eq!(reason, HaltReason::Stop);
    assert_eq!(out, "F");
}

#[test]
fn dup_duplicates_the_targeted_block() {
    // DUP(start_off=3, length=1) duplicates the OUT opcode at ip+3
    // right after itself, so it fires twice before STOP.
    let (reason, out) = run("ATG AAA AAA CCA AAT AAC GTA TGA", []).unwrap();
    assert_eq!(reason, HaltReason::Stop);
    assert_eq!(out, "AA");
}

#[test]
fn trp_relocates_a_block_non_overlapping() {
    // TRP(src_off=7, length=3, dst_off=4) cuts the second LDI/OUT group
    // and reinserts it ahead of the first; execution resumes past the
    // reinserted block, so only the (now-shifted) first group runs.
    let (reason, out) = run("ATG CCG ACT AAT ACA AAA AAA GTA AAA AAC GTA TGA", []).unwrap();
    assert_eq!(reason, HaltReason::Stop);
    assert_eq!(out, "A");
}

#[test]
fn trp_overlapping_destination_inside_cut_region_is_address_fault() {
    // TRP(src_off=0, length=5, dst_off=2): the destination offset (3)
    // falls inside the block being cut (length 5), so `d - n` would
    // underflow an unchecked usize subtraction; it must surface as
    // AddressFault instead of panicking.
    let err = run("ATG CCG AAA ACC AAG TGA", []).unwrap_err();
    assert!(matches!(err, Fault::AddressFault { .. }));
}
