//! Text format I/O: parsing the puzzle input file and rendering the
//! covering output file.

/// puzzle input format (nom-based cardinality line, line-delimited field rows)
pub mod input;

/// covering output format (per-puzzle block plus the trailing total)
pub mod output;
