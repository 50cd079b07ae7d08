// Resume analysis engine.
// normalize → catalog → matcher → scoring / narrative → analyzer; report and
// handlers sit on top. Everything below `analyzer` is synchronous and pure.

pub mod analyzer;
pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod narrative;
pub mod normalize;
pub mod report;
pub mod scoring;
