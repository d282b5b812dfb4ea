use anyhow::{anyhow, Result};
use rescue::kit::*;
use rescue::task::Global;

#[test]
fn test_report() {
    let (mut sink, mut completion) = channel();
    Recover::report().call(PanicValue::from("boom"), &mut sink);
    drop(sink);
    assert_eq!(completion.wait(), Err(PANIC_RECOVERED.with_value("boom")));
}

#[test]
fn test_report_error_value() {
    let (mut sink, mut completion) = channel();
    let value = PanicValue::from(anyhow!("panic value is an error"));
    Recover::default().call(value.clone(), &mut sink);
    drop(sink);
    assert_eq!(completion.wait(), Err(PANIC_RECOVERED.with_value(value)));
}

#[test]
fn test_silent_and_log() {
    for recover in [Recover::silent(), Recover::log()] {
        let (mut sink, mut completion) = channel();
        recover.call(PanicValue::from("boom"), &mut sink);
        assert!(!sink.is_filled());
        drop(sink);
        assert_eq!(completion.wait(), Ok(()));
    }
}

#[test]
fn test_custom() {
    let recover = Recover::new(|value, sink| {
        sink.put(RECOVER_PANICKED.with_value(format!("custom: {value}")))
            .ok();
    });
    let (mut sink, mut completion) = channel();
    recover.clone().call(PanicValue::from("boom"), &mut sink);
    drop(sink);
    assert_eq!(
        completion.wait(),
        Err(RECOVER_PANICKED.with_value("custom: boom"))
    );
    assert!(recover.ptr_eq(&recover.clone()));
    assert!(!recover.ptr_eq(&Recover::report()));
}

#[test]
fn test_global_default_recover() -> Result<()> {
    let global = Global::new();
    let recover = Recover::silent();
    global.set_default_recover(recover.clone());
    assert!(global.get_default_recover().ptr_eq(&recover));
    let other = Recover::log();
    global.set_default_recover(other.clone());
    assert!(global.get_default_recover().ptr_eq(&other));
    Ok(())
}

#[test]
fn test_global_stack_size() -> Result<()> {
    let global = Global::default();
    assert_eq!(global.get_stack_size(), None);
    global.set_stack_size(64 * 1024);
    assert_eq!(global.get_stack_size(), Some(64 * 1024));
    global.set_stack_size(0);
    assert_eq!(global.get_stack_size(), None);
    Ok(())
}
