//! Calling functions with positional arguments.
//!
//! Arguments are passed as a tuple, so the arity is checked by the compiler.

use rescue_signal::Completion;
use rescue_task::Task;
use std::any::type_name;

/// A function that can be called with the tuple `Args`.
pub trait Invoke<Args> {
    type Output;

    fn invoke(self, args: Args) -> Self::Output;

    /// Renders the signature, e.g. `fn(i32, i32) -> i32`.
    fn signature() -> String;
}

macro_rules! impl_invoke {
    ($($ty:ident $arg:ident),*) => {
        impl<F, R, $($ty,)*> Invoke<($($ty,)*)> for F
        where
            F: FnOnce($($ty),*) -> R,
        {
            type Output = R;

            fn invoke(self, ($($arg,)*): ($($ty,)*)) -> R {
                self($($arg),*)
            }

            fn signature() -> String {
                let params: Vec<&str> = vec![$(type_name::<$ty>()),*];
                render(&params, type_name::<R>())
            }
        }
    };
}

impl_invoke!();
impl_invoke!(T1 a1);
impl_invoke!(T1 a1, T2 a2);
impl_invoke!(T1 a1, T2 a2, T3 a3);
impl_invoke!(T1 a1, T2 a2, T3 a3, T4 a4);
impl_invoke!(T1 a1, T2 a2, T3 a3, T4 a4, T5 a5);
impl_invoke!(T1 a1, T2 a2, T3 a3, T4 a4, T5 a5, T6 a6);

fn render(params: &[&str], output: &str) -> String {
    let mut signature = format!("fn({})", params.join(", "));
    if output != type_name::<()>() {
        signature.push_str(" -> ");
        signature.push_str(output);
    }
    signature
}

/// Renders the signature of `func` called with `Args`.
pub fn signature<F, Args>(_func: &F) -> String
where
    F: Invoke<Args>,
{
    F::signature()
}

/// Wraps the call into a task. The output of `func` is dropped.
pub fn task_with<F, Args>(func: F, args: Args) -> Task
where
    F: Invoke<Args> + Send + 'static,
    Args: Send + 'static,
{
    Task::new(move || {
        func.invoke(args);
    })
}

/// Starts the call on a new thread with the default recover function.
pub fn go_with<F, Args>(func: F, args: Args) -> Completion
where
    F: Invoke<Args> + Send + 'static,
    Args: Send + 'static,
{
    task_with(func, args).go()
}
