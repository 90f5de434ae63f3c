pub mod album;
pub mod track;
