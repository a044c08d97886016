//! QuickJS-backed compiler service.
//!
//! Executes the packaged TypeScript compiler inside an embedded QuickJS
//! engine, the same shape as the original's V8 hosting: the compiler script
//! installs the `ts` global, the driver wires source, stdlib and the
//! diagnostic callback together, and the emitted JavaScript comes back
//! through the `result` global.
//!
//! Every `compile` call constructs a fresh runtime and context, so no
//! compiler state can leak between invocations and concurrent calls never
//! contend on a shared engine.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use rquickjs::{function::Opt, Context, Ctx, Function, Runtime, Value};

use crate::diagnostic::Diagnostic;
use crate::resources::{self, EngineResources};
use crate::service::{CompileOutput, CompilerService, EngineError};

/// A [`CompilerService`] that runs the packaged compiler under QuickJS.
///
/// Holds only the shared read-only resources; the engine itself is created
/// per invocation.
#[derive(Debug, Clone)]
pub struct QuickJsEngine {
    resources: Arc<EngineResources>,
}

impl QuickJsEngine {
    /// Create an engine from explicit resources.
    pub fn new(resources: Arc<EngineResources>) -> Self {
        Self { resources }
    }

    /// Create an engine from the process-wide resource store.
    ///
    /// Fails with [`EngineError::Unavailable`] if the store was not
    /// initialized at process start.
    pub fn from_global() -> Result<Self, EngineError> {
        Ok(Self::new(resources::get()?))
    }
}

impl CompilerService for QuickJsEngine {
    fn compile(&self, source: &str, type_check: bool) -> Result<CompileOutput, EngineError> {
        let runtime = Runtime::new()
            .map_err(|e| EngineError::Unavailable(format!("cannot start QuickJS runtime: {e}")))?;
        let context = Context::full(&runtime)
            .map_err(|e| EngineError::Unavailable(format!("cannot create QuickJS context: {e}")))?;

        tracing::debug!(
            type_check,
            source_len = source.len(),
            "starting compiler invocation"
        );

        let collected: Rc<RefCell<Vec<Diagnostic>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&collected);

        let code = context.with(|ctx| -> Result<String, EngineError> {
            let globals = ctx.globals();
            globals
                .set("source", source)
                .map_err(|e| bootstrap_error(&ctx, e))?;
            globals
                .set("libSource", self.resources.stdlib.as_str())
                .map_err(|e| bootstrap_error(&ctx, e))?;
            globals
                .set("typeChecking", type_check)
                .map_err(|e| bootstrap_error(&ctx, e))?;

            let report = Function::new(
                ctx.clone(),
                move |start: i32, length: i32, message: String, block: Opt<String>| {
                    let mut diagnostic =
                        Diagnostic::new(message, start.max(0) as u32, length.max(0) as u32);
                    if let Some(block) = block.0.filter(|b| !b.is_empty()) {
                        diagnostic = diagnostic.with_block(block);
                    }
                    sink.borrow_mut().push(diagnostic);
                },
            )
            .map_err(|e| bootstrap_error(&ctx, e))?;
            globals
                .set("__tessera_report", report)
                .map_err(|e| bootstrap_error(&ctx, e))?;

            eval_script(&ctx, "compiler", &self.resources.compiler)?;
            eval_script(&ctx, "driver", &self.resources.driver)?;

            globals.get::<_, String>("result").map_err(|_| {
                EngineError::Evaluation("driver did not produce a result".into())
            })
        })?;

        let diagnostics = collected.take();
        tracing::debug!(
            emitted_len = code.len(),
            diagnostics = diagnostics.len(),
            "compiler invocation finished"
        );

        Ok(CompileOutput { code, diagnostics })
    }
}

fn eval_script(ctx: &Ctx<'_>, name: &str, script: &str) -> Result<(), EngineError> {
    ctx.eval::<(), _>(script).map_err(|e| match e {
        rquickjs::Error::Exception => {
            EngineError::Evaluation(format!("{name}: {}", describe_exception(&ctx.catch())))
        }
        other => EngineError::Evaluation(format!("{name}: {other}")),
    })
}

fn bootstrap_error(ctx: &Ctx<'_>, error: rquickjs::Error) -> EngineError {
    match error {
        rquickjs::Error::Exception => {
            EngineError::Evaluation(format!("bootstrap: {}", describe_exception(&ctx.catch())))
        }
        other => EngineError::Evaluation(format!("bootstrap: {other}")),
    }
}

fn describe_exception(value: &Value<'_>) -> String {
    if let Some(exception) = value.as_exception() {
        exception
            .message()
            .unwrap_or_else(|| "unknown exception".into())
    } else {
        format!("{value:?}")
    }
}
