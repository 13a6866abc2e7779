pub mod department;
pub mod employee;
pub mod file;
pub mod shift;
pub mod view;
