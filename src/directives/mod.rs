mod expect;
mod send;
mod spawn;

pub use expect::ExpectPrompt;
pub use send::SendAnswer;
pub use spawn::Spawn;
