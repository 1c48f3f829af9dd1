mod source_host;
mod tool_runner;

pub use source_host::SourceHostPort;
pub use tool_runner::ToolRunnerPort;
