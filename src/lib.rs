#[macro_use]
extern crate log;
#[macro_use]
extern crate rocket;

pub mod activity;
pub mod admin;
pub mod attendance;
pub mod backup;
pub mod calendar;
pub mod database;
pub mod error;
pub mod gift;
pub mod membership;
pub mod notification;
pub mod registry;
pub mod tools;
pub mod web;
