pub mod firestore;
pub mod repository;
