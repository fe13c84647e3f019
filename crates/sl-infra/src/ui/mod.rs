mod log;

pub use log::{CloseSignal, CollectedResults, LogNotifier, ResultEvent};
