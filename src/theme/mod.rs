//! Visual theming: shared color tokens.

pub mod palette;
