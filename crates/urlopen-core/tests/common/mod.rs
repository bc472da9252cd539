pub mod recording_runner;
