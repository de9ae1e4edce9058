use crate::{
    ast::{Expr, Position},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::EvalResult,
            function::{builtin, transpose},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the position
/// of the call. Handlers check their own arity, so they are safe to call
/// directly.
type BuiltinFn = fn(&[Value], Position) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"        => { arity: 1, func: builtin::sin },
    "cos"        => { arity: 1, func: builtin::cos },
    "transpose"  => { arity: 1, func: transpose::transpose },
    "create_rat" => { arity: 1, func: builtin::create_rat },
    "reduce"     => { arity: 1, func: builtin::reduce },
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The name is resolved before any argument is evaluated, so an unknown
    /// function is reported even when its arguments would fail. Arguments
    /// are then evaluated left to right and their count is checked against
    /// the table.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `position`: Source position of the call.
    ///
    /// # Returns
    /// The function result, or an error if lookup, arity or the builtin
    /// itself fails.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     position: Position)
                                     -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                                  position })?;

        let arg_vals = arguments.iter()
                                .map(|argument| self.eval(argument))
                                .collect::<EvalResult<Vec<_>>>()?;

        check_arity(name, &arg_vals, builtin.arity, position)?;
        (builtin.func)(&arg_vals, position)
    }
}

/// Checks that a builtin received exactly `expected` arguments.
///
/// # Errors
/// Returns `ArityMismatch` naming the function and both counts.
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, position: Position) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                          expected,
                                          found: args.len(),
                                          position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn call(name: &str, arguments: Vec<Expr>) -> EvalResult<Value> {
        Environment::new().eval_function_call(name, &arguments, Position::default())
    }

    fn num(value: f64) -> Expr {
        Expr::Number { value,
                       position: Position::default() }
    }

    #[test]
    fn unknown_name_wins_over_argument_errors() {
        let missing = Expr::Variable { name:     "nope".to_string(),
                                       position: Position::default(), };
        let err = call("tan", vec![missing]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFunction);
    }

    #[test]
    fn wrong_argument_count() {
        let err = call("sin", vec![num(1.0), num(2.0)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArityMismatch);

        let err = call("cos", vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArityMismatch);
    }

    #[test]
    fn table_names_are_unique() {
        for (index, name) in BUILTIN_FUNCTIONS.iter().enumerate() {
            assert!(!BUILTIN_FUNCTIONS[index + 1..].contains(name), "duplicate builtin {name}");
        }
    }
}
