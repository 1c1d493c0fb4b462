#![no_std]

pub mod access_control;
pub mod errors;
pub mod policy;
pub mod transfer_request;
pub mod types;

pub mod access_registry_proxy;
pub mod custody_vault_proxy;
pub mod delay_transfer_request_proxy;
pub mod signature_protocol_proxy;
pub mod transfer_request_proxy;
pub mod window_transfer_request_proxy;
