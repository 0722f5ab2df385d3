use segregation_cost::adapters::outbound::{init_console_logger, init_domain_logger, init_noop_logger, FanoutLogger};
use segregation_cost::domains::logger::{DomainLogger, DynLogger};
use std::sync::{Arc, Mutex};

struct BridgeCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl BridgeCapture {
    fn new() -> Self { Self { messages: Arc::new(Mutex::new(Vec::new())) } }
}

impl DomainLogger for BridgeCapture {
    fn info(&self, msg: &str) { self.messages.lock().unwrap().push(format!("INFO:{}", msg)); }
    fn warn(&self, msg: &str) { self.messages.lock().unwrap().push(format!("WARN:{}", msg)); }
    fn error(&self, msg: &str) { self.messages.lock().unwrap().push(format!("ERR:{}", msg)); }
    fn flush(&self) { self.messages.lock().unwrap().push("FLUSH".to_string()); }
}

#[test]
fn test_fanout_reaches_every_sink() {
    let first = Arc::new(BridgeCapture::new());
    let second = Arc::new(BridgeCapture::new());
    let fanout = FanoutLogger::new(vec![first.clone() as DynLogger, second.clone() as DynLogger]);

    fanout.info("one");
    fanout.warn("two");
    fanout.error("three");
    fanout.flush();

    for capture in [&first, &second] {
        let msgs = capture.messages.lock().unwrap();
        assert_eq!(*msgs, vec!["INFO:one", "WARN:two", "ERR:three", "FLUSH"]);
    }
}

#[test]
fn test_fanout_without_sinks() {
    let fanout = FanoutLogger::new(Vec::new());
    fanout.warn("nobody listens");
    fanout.flush();
}

#[test]
fn test_console_and_noop_loggers_accept_calls() {
    let noop = init_noop_logger();
    noop.info("ignored");
    noop.error("ignored-err");

    let console = init_console_logger();
    console.info("no subscriber installed, still fine");

    let fallback = init_domain_logger(None);
    fallback.warn("console only");
    fallback.flush();
}
