pub mod suggestion;
