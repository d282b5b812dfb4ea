use anyhow::Result;
use rescue::kit::*;
use std::hint::black_box;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    with_default_recover()?;
    with_custom_recover()?;
    with_nested_tasks()?;
    Ok(())
}

fn divide(a: i32, b: i32) {
    println!("{a} / {b} = {}", a / b);
}

fn with_default_recover() -> Result<()> {
    println!("\nTasks with the default recover function:\n");
    go_with(divide, (10, 5)).wait()?;
    if let Err(failure) = go_with(divide, (1, black_box(0))).wait() {
        println!("Task exits with error: {failure}");
    }
    Ok(())
}

fn with_custom_recover() -> Result<()> {
    println!("\nTasks with a custom recover function:\n");
    let original = get_default_recover();
    let (tx, rx) = mpsc::channel();
    set_default_recover(Recover::new(move |value, _sink| {
        tx.send(value.to_string()).ok();
    }));

    let outcome = task_with(divide, (1, black_box(0))).go().wait();
    println!("Outcome: {outcome:?}, recovered: {}", rx.recv()?);

    let outcome = task_with(divide, (1, black_box(0)))
        .with_recover_fn(|value, sink| {
            println!("The panic has been recovered and reported: {value}");
            sink.put(PANIC_RECOVERED.with_value(value)).ok();
        })
        .go()
        .wait();
    println!("Outcome: {outcome:?}");

    set_default_recover(original);
    Ok(())
}

fn with_nested_tasks() -> Result<()> {
    println!("\nNested tasks:\n");
    let mut parent = go(|| {
        for _ in 0..3 {
            let failure = go_with(divide, (1, black_box(0))).wait();
            println!("Child task exits with: {failure:?}");
            thread::sleep(Duration::from_millis(100));
        }
        println!("Exit parent task");
    });
    parent.wait()?;
    Ok(())
}
