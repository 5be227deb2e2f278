pub mod row;
pub mod sequence;
pub mod table;
