pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod storage;
