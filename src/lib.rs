pub mod assemble;
pub mod cli;
pub mod ctx;
pub mod error;
pub mod io;
pub mod measure;
pub mod period;
pub mod pipeline;
pub mod qc;
pub mod registry;
pub mod scan;
pub mod schema;
pub mod table;
pub mod tracer;
