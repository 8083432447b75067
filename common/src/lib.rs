#![no_std]

pub mod pricefeed;
pub mod proxy;
pub mod source;
