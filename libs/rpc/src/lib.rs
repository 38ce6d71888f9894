//! Protobuf contract for the item service.
//!
//! The Rust sources under `generated/` are produced by `buf generate` from
//! `proto/item/v1/item.proto` and checked in, so building this crate does not
//! need `protoc`.

mod generated;

pub use generated::item;
