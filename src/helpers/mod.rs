//! Collaborators shared by the table layers.
pub mod file;
