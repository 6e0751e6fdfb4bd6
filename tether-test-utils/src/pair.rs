// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pair {
    pub value1: i32,
    pub value2: i32,
}

impl Pair {
    #[must_use]
    pub const fn new(value1: i32, value2: i32) -> Self {
        Self { value1, value2 }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair[value1={}, value2={}]", self.value1, self.value2)
    }
}
