pub mod fake_source_host;
pub mod fake_tool_runner;

pub use fake_source_host::FakeSourceHost;
pub use fake_tool_runner::FakeToolRunner;
