pub mod enums;
pub mod temp_file;
