
/// Connection helpers
pub mod db_tests;
