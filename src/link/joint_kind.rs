/*
  Copyright 2020 Takashi Ogura

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
use std::fmt::{self, Display};

/// Kind of the joint, which selects the driven DH variable
///
/// It is fixed when the link is created.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Default)]
pub enum JointKind {
    /// Rotational joint. `theta` is driven [rad].
    #[default]
    Revolute,
    /// Linear joint. `d` is driven.
    Prismatic,
}

impl JointKind {
    #[inline]
    pub fn is_revolute(self) -> bool {
        matches!(self, JointKind::Revolute)
    }
}

impl Display for JointKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JointKind::Revolute => write!(f, "[⚙θ]"),
            JointKind::Prismatic => write!(f, "[↕d]"),
        }
    }
}

#[test]
fn test_default_is_revolute() {
    assert!(JointKind::default().is_revolute());
    assert!(!JointKind::Prismatic.is_revolute());
}
