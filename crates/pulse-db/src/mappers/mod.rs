//! Entity ↔ Model mappers

mod reaction;
