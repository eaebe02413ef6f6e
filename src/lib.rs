// src/lib.rs

pub mod api;
pub mod calculator;
pub mod config;
pub mod web;
