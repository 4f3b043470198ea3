// API routes and handlers

pub mod exams;
pub mod health;
pub mod nutrition;
pub mod routes;
pub mod subscription;
pub mod supplements;
pub mod webhook;
pub mod workouts;
