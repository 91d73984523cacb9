// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Error, Formatter};

/// The error returned when accessing the top of a [`Stack`][Stack] that has
/// nothing on it.
///
/// # Examples
///
/// ```rust
/// # use growstack::{Stack, StackError};
/// let mut stack: Stack<usize> = Stack::new();
/// assert_eq!(Err(StackError::Empty), stack.pop());
/// assert_eq!("stack is empty", StackError::Empty.to_string());
/// ```
///
/// [Stack]: struct.Stack.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackError {
    /// The stack contains no elements.
    Empty,
}

impl Display for StackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            StackError::Empty => write!(f, "stack is empty"),
        }
    }
}

impl std::error::Error for StackError {}
