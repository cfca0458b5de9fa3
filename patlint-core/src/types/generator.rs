//! Yield-expression type inference.

use crate::model::YieldExpr;

use super::{Ty, TypeEvalContext};

/// Qualified name of the three-parameter generator container type
/// `Generator[YieldType, SendType, ReturnType]`.
pub const GENERATOR_QNAME: &str = "typing.Generator";

/// Infers the type a yield expression evaluates to.
///
/// A plain `yield e` evaluates to the type of `e` unchanged (and to
/// nothing when there is no sub-expression or the context does not know
/// its type). A delegating `yield from e` evaluates to the delegate
/// generator's return type: the third argument of a three-parameter
/// `typing.Generator`, and the "no value" type for any other delegate.
pub fn infer_yield_type(expr: &YieldExpr, ctx: &TypeEvalContext) -> Option<Ty> {
    let sub_type = expr
        .expression()
        .and_then(|e| ctx.type_of(e))
        .cloned();

    if expr.is_delegating() {
        if let Some(Ty::Class { ref name, ref args }) = sub_type {
            if name == GENERATOR_QNAME && args.len() == 3 {
                return Some(args[2].clone());
            }
        }
        return Some(Ty::None);
    }

    sub_type
}
