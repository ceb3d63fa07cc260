pub mod benkon;
