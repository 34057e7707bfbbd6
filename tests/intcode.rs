//! The example programs published alongside the 2019 Intcode puzzles.

use advent_archive::intcode::{parse_program, Event, Machine, Word};

#[track_caller]
fn final_memory(program: &str) -> Vec<Word> {
    let words = parse_program(program).unwrap();
    let len = words.len();
    let mut machine = Machine::new(words);
    machine.run_to_halt().unwrap();
    (0..len).map(|addr| machine.read(addr)).collect()
}

#[track_caller]
fn outputs_for(program: &str, inputs: &[Word]) -> Vec<Word> {
    let mut machine: Machine = program.parse().unwrap();
    for &input in inputs {
        machine.push_input(input);
    }
    machine.run_to_halt().unwrap()
}

#[test]
fn day_two_arithmetic() {
    assert_eq!(
        final_memory("1,9,10,3,2,3,11,0,99,30,40,50"),
        [3500, 9, 10, 70, 2, 3, 11, 0, 99, 30, 40, 50]
    );
    assert_eq!(final_memory("1,0,0,0,99"), [2, 0, 0, 0, 99]);
    assert_eq!(final_memory("2,3,0,3,99"), [2, 3, 0, 6, 99]);
    assert_eq!(final_memory("2,4,4,5,99,0"), [2, 4, 4, 5, 99, 9801]);
    assert_eq!(
        final_memory("1,1,1,4,99,5,6,0,99"),
        [30, 1, 1, 4, 2, 5, 6, 0, 99]
    );
}

#[test]
fn day_five_parameter_modes() {
    assert_eq!(final_memory("1002,4,3,4,33"), [1002, 4, 3, 4, 99]);
    assert_eq!(final_memory("1101,100,-1,4,0"), [1101, 100, -1, 4, 99]);
}

#[test]
fn day_five_comparisons() {
    // Equal to 8, position mode.
    assert_eq!(outputs_for("3,9,8,9,10,9,4,9,99,-1,8", &[8]), [1]);
    assert_eq!(outputs_for("3,9,8,9,10,9,4,9,99,-1,8", &[7]), [0]);
    // Less than 8, position mode.
    assert_eq!(outputs_for("3,9,7,9,10,9,4,9,99,-1,8", &[5]), [1]);
    assert_eq!(outputs_for("3,9,7,9,10,9,4,9,99,-1,8", &[9]), [0]);
    // Equal to 8, immediate mode.
    assert_eq!(outputs_for("3,3,1108,-1,8,3,4,3,99", &[8]), [1]);
    // Less than 8, immediate mode.
    assert_eq!(outputs_for("3,3,1107,-1,8,3,4,3,99", &[8]), [0]);
}

#[test]
fn day_five_jumps() {
    let position = "3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9";
    assert_eq!(outputs_for(position, &[0]), [0]);
    assert_eq!(outputs_for(position, &[3]), [1]);

    let immediate = "3,3,1105,-1,9,1101,0,0,12,4,12,99,1";
    assert_eq!(outputs_for(immediate, &[0]), [0]);
    assert_eq!(outputs_for(immediate, &[-5]), [1]);
}

#[test]
fn day_five_compare_to_eight() {
    let program = "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,\
                   1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,\
                   999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99";
    assert_eq!(outputs_for(program, &[7]), [999]);
    assert_eq!(outputs_for(program, &[8]), [1000]);
    assert_eq!(outputs_for(program, &[9]), [1001]);
}

#[test]
fn day_nine_relative_base() {
    let quine = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";
    assert_eq!(outputs_for(quine, &[]), parse_program(quine).unwrap());

    assert_eq!(
        outputs_for("1102,34915192,34915192,7,4,7,99,0", &[]),
        [1219070632396864]
    );
    assert_eq!(
        outputs_for("104,1125899906842624,99", &[]),
        [1125899906842624]
    );
}

#[test]
fn resumes_between_inputs() {
    // Echoes inputs forever.
    let mut machine: Machine = "3,7,4,7,1105,1,0".parse().unwrap();
    for value in [1, -2, 30] {
        assert_eq!(machine.run().unwrap(), Event::AwaitingInput);
        machine.push_input(value);
        assert_eq!(machine.run_until_input().unwrap(), [value]);
    }
    assert!(!machine.is_halted());
}
