#![allow(dead_code)]

pub mod recorder;
pub mod reference;
pub mod refusing;
pub mod setup;
pub mod templates;
