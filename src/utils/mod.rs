mod await_futures;
mod flat;
mod seperate;

pub use await_futures::{await_futures, PinFuture};
pub use flat::flat;
pub use seperate::seperate;
