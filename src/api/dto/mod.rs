pub mod memories;
