mod common;
mod completion;
mod report;
