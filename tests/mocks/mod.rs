mod mock_submitter;

pub use mock_submitter::MockSubmitter;
