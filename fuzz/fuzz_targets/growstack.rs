#![no_main]
use arbitrary::Arbitrary;
use growstack::{Stack, StackError, INITIAL_CAPACITY};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    Pop,
    Peek,
    PeekMut(String),
    Clear,
    Duplicate,
}

use self::Action::*;

fuzz_target!(|actions: Vec<Action>| {
    let mut stack = Stack::new();
    let mut model: Vec<String> = Vec::new();
    let mut capacity = INITIAL_CAPACITY;
    for action in actions {
        match action {
            Push(data) => {
                if model.len() == capacity {
                    capacity *= 2;
                }
                stack.push(data.clone());
                model.push(data);
            }
            Pop => {
                assert_eq!(model.pop().ok_or(StackError::Empty), stack.pop());
            }
            Peek => {
                assert_eq!(model.last().ok_or(StackError::Empty), stack.peek());
            }
            PeekMut(data) => match (model.last_mut(), stack.peek_mut()) {
                (Some(expected), Ok(top)) => {
                    expected.push_str(&data);
                    top.push_str(&data);
                }
                (None, Err(StackError::Empty)) => {}
                (expected, actual) => panic!("peek_mut mismatch: {:?} vs {:?}", expected, actual),
            },
            Clear => {
                stack.clear();
                model.clear();
            }
            Duplicate => {
                stack = stack.clone();
            }
        }
        assert_eq!(model.len(), stack.count());
        assert_eq!(capacity, stack.capacity());
    }
});
