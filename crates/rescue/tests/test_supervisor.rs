use anyhow::Result;
use rescue::kit::*;
use rescue::task::{launch, supervise, Supervised};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Journal {
    steps: Arc<Mutex<Vec<&'static str>>>,
    panic_in_perform: bool,
    panic_in_fallback: bool,
}

impl Journal {
    fn push(&self, step: &'static str) {
        self.steps.lock().unwrap().push(step);
    }
}

impl Supervised for Journal {
    fn label(&self) -> &str {
        "journal"
    }

    fn perform(&mut self) {
        self.push("perform");
        if self.panic_in_perform {
            panic!("perform failed");
        }
    }

    fn fallback(&mut self, value: PanicValue, sink: &mut Sink) {
        self.push("fallback");
        sink.put(PANIC_RECOVERED.with_value(value)).unwrap();
        if self.panic_in_fallback {
            panic!("fallback failed");
        }
    }
}

#[test]
fn test_clean() -> Result<()> {
    let journal = Journal::default();
    let steps = journal.steps.clone();
    let (sink, mut completion) = channel();
    supervise(journal, sink);
    assert_eq!(completion.wait(), Ok(()));
    assert_eq!(*steps.lock().unwrap(), vec!["perform"]);
    Ok(())
}

#[test]
fn test_fallback() -> Result<()> {
    let journal = Journal {
        panic_in_perform: true,
        ..Journal::default()
    };
    let steps = journal.steps.clone();
    let (sink, mut completion) = channel();
    supervise(journal, sink);
    assert_eq!(
        completion.wait(),
        Err(PANIC_RECOVERED.with_value("perform failed"))
    );
    assert_eq!(*steps.lock().unwrap(), vec!["perform", "fallback"]);
    Ok(())
}

#[test]
fn test_double_fault_wins() -> Result<()> {
    let journal = Journal {
        panic_in_perform: true,
        panic_in_fallback: true,
        ..Journal::default()
    };
    let (sink, mut completion) = channel();
    supervise(journal, sink);
    assert_eq!(
        completion.wait(),
        Err(RECOVER_PANICKED.with_value("fallback failed"))
    );
    Ok(())
}

#[test]
fn test_launch() -> Result<()> {
    let journal = Journal {
        panic_in_perform: true,
        ..Journal::default()
    };
    let failure = launch(journal)?.wait().unwrap_err();
    assert!(failure.is_work_panicked());
    Ok(())
}

struct Unnamed;

impl Supervised for Unnamed {
    fn label(&self) -> &str {
        "\0"
    }

    fn perform(&mut self) {}

    fn fallback(&mut self, _value: PanicValue, _sink: &mut Sink) {}
}

#[test]
fn test_launch_rejects_nul_label() -> Result<()> {
    let err = match launch(Unnamed) {
        Ok(_) => anyhow::bail!("launched with a NUL label"),
        Err(err) => err,
    };
    assert!(matches!(err, LaunchError::InvalidLabel { .. }));
    Ok(())
}
