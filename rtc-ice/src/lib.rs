#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod agent;
pub mod candidate;
pub mod keepalive;
pub mod network_type;
pub mod rand;
pub mod tcp_type;
