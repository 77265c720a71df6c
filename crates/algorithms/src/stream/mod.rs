//! Stream ciphers

pub mod rc4;
