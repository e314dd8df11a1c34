//! Arithmetic on [`Money`](crate::core::money::Money) values.
//!
//! Operations live as inherent methods on `Money`; this module groups them
//! by concern.

pub mod allocation;
pub mod ops;
pub mod rounding;
