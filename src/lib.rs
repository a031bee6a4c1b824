//! A library which solves the 3x3x3 Rubik's cube with Thistlethwaite's four phase group reduction,
//! bridging each phase with a bidirectional breadth first search.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod moves;
