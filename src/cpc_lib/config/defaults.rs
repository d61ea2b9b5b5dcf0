use crate::config::{self};

pub const OVERFLOW_POLICY: config::OverflowPolicy = config::OverflowPolicy::Extend;
pub const MAX_DEPTH: usize = 256;
pub const TERMINATORS: &[char] = &['.', '!', '?'];

pub const DEFAULT_PROPOSITION_COUNT: usize = 32;
