// Moduły poszczególnych komend CLI
pub mod decode;
pub mod encode;
pub mod table;
