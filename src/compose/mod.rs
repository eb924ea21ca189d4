pub mod composed;
