// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod item {
    pub mod v1 {
        include!("item.v1.rs");
        // item.v1.tonic.rs is auto-included by item.v1.rs
    }
}
