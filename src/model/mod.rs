// src/model/mod.rs

pub mod demand;
pub mod prices;
