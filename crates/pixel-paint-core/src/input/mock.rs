use super::{InputFrame, InputProvider};

/// No-hardware input source used during bring-up: the stick never moves.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_frame(&mut self) -> Result<InputFrame, Self::Error> {
        Ok(InputFrame::default())
    }
}
