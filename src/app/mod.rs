// Application layer: the scripted demo runs built on the core patterns.

pub mod demos;
