pub mod lines;
pub mod record_reader;
pub mod recorder;
pub mod renderers;
pub mod writer;

pub use lines::split_lines;
pub use record_reader::read_record;
pub use recorder::TextExtractionRecorder;
pub use renderers::render;
pub use writer::write_atomic;
