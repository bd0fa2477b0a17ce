pub mod reader;
pub mod writer;

pub const HEADER: [&str; 2] = ["XYZ_File", "Lowest_N-N_Distance"];

const DELIMITER: char = ',';
const QUOTE: char = '"';
