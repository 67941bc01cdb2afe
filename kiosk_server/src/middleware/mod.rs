mod recovery;

pub use recovery::RecoveryMiddlewareFactory;
