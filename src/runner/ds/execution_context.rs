use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::config::RealmConfig;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::realm::{CodeRealm, JsCodeRealmType};

pub struct ExecutionContext {
    pub function: JsObjectType,
    pub name: String,
    /// False for bound and override trampolines, which only forward to another call.
    /// Such frames do not count toward the depth limit.
    pub counted: bool,
}

struct CallStack {
    frames: Vec<ExecutionContext>,
    counted_depth: usize,
}

pub struct ExecutionContextStack {
    stack: Rc<RefCell<CallStack>>,
    max_depth: Option<usize>,
}
impl ExecutionContextStack {
    pub fn new(max_depth: Option<usize>) -> Self {
        ExecutionContextStack {
            stack: Rc::new(RefCell::new(CallStack {
                frames: Vec::new(),
                counted_depth: 0,
            })),
            max_depth,
        }
    }

    pub fn get_running_function(&self) -> Option<JsObjectType> {
        self.stack
            .borrow()
            .frames
            .last()
            .map(|ctx| ctx.function.clone())
    }

    /// Pushes `ctx`. The frame is popped when the returned guard is dropped, including
    /// while unwinding.
    pub fn push_execution_ctx(
        &mut self,
        ctx: ExecutionContext,
    ) -> Result<ExecutionFrame, JErrorType> {
        let mut stack = self.stack.borrow_mut();
        if ctx.counted {
            if let Some(max_depth) = self.max_depth {
                if stack.counted_depth >= max_depth {
                    tracing::warn!(
                        depth = stack.counted_depth,
                        function = %ctx.name,
                        "call depth limit reached"
                    );
                    return Err(JErrorType::RangeError(
                        "Maximum call stack size exceeded".to_string(),
                    ));
                }
            }
            stack.counted_depth += 1;
        }
        stack.frames.push(ctx);
        Ok(ExecutionFrame {
            stack: self.stack.clone(),
        })
    }

    /// All frames on the stack, trampolines included.
    pub fn depth(&self) -> usize {
        self.stack.borrow().frames.len()
    }

    /// Frames that count toward the depth limit.
    pub fn counted_depth(&self) -> usize {
        self.stack.borrow().counted_depth
    }
}

/// Pops its frame from the execution context stack on drop.
#[must_use]
pub struct ExecutionFrame {
    stack: Rc<RefCell<CallStack>>,
}

impl Drop for ExecutionFrame {
    fn drop(&mut self) {
        match self.stack.try_borrow_mut() {
            Ok(mut stack) => {
                if let Some(ctx) = stack.frames.pop() {
                    if ctx.counted {
                        stack.counted_depth -= 1;
                    }
                }
            }
            Err(_) => tracing::warn!("call stack borrowed, frame not popped"),
        }
    }
}

/// State threaded through every call: the realm and the running call stack.
pub struct EvalContext {
    realm: JsCodeRealmType,
    pub ctx_stack: ExecutionContextStack,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::with_config(RealmConfig::default())
    }

    pub fn with_config(config: RealmConfig) -> Self {
        let max_depth = config.max_call_depth;
        EvalContext {
            realm: Rc::new(CodeRealm::new(config)),
            ctx_stack: ExecutionContextStack::new(max_depth),
        }
    }

    pub fn realm(&self) -> &JsCodeRealmType {
        &self.realm
    }

    /// The function object whose body is currently executing, if any.
    pub fn running_function(&self) -> Option<JsObjectType> {
        self.ctx_stack.get_running_function()
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
