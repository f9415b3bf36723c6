// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operator precedence (§3, §4.5.2): `oxc_ast`'s `Expression` enum carries
//! no precedence field, so the serializer computes it from the node's
//! syntactic kind, the same way `oxc_ast` itself classifies expression
//! kinds by matching on the enum rather than storing a precedence tag.

use oxc_ast::ast::Expression;
use oxc_syntax::operator::{BinaryOperator, LogicalOperator};

/// Precedence levels, lowest to highest, matching the ECMAScript grammar's
/// operator-precedence table closely enough to drive parenthesization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum OperatorPrecedence {
    Sequence,
    Assignment,
    Conditional,
    NullishCoalescing,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponentiation,
    Unary,
    Update,
    LeftHandSide,
    Member,
    Primary,
}

pub(crate) fn precedence_of(expr: &Expression) -> OperatorPrecedence {
    match expr {
        Expression::SequenceExpression(_) => OperatorPrecedence::Sequence,
        Expression::AssignmentExpression(_) | Expression::YieldExpression(_) => {
            OperatorPrecedence::Assignment
        }
        Expression::ConditionalExpression(_) => OperatorPrecedence::Conditional,
        Expression::LogicalExpression(e) => match e.operator {
            LogicalOperator::Or => OperatorPrecedence::LogicalOr,
            LogicalOperator::And => OperatorPrecedence::LogicalAnd,
            LogicalOperator::Coalesce => OperatorPrecedence::NullishCoalescing,
        },
        Expression::BinaryExpression(e) => match e.operator {
            BinaryOperator::BitwiseOR => OperatorPrecedence::BitwiseOr,
            BinaryOperator::BitwiseXOR => OperatorPrecedence::BitwiseXor,
            BinaryOperator::BitwiseAnd => OperatorPrecedence::BitwiseAnd,
            BinaryOperator::Equality
            | BinaryOperator::Inequality
            | BinaryOperator::StrictEquality
            | BinaryOperator::StrictInequality => OperatorPrecedence::Equality,
            BinaryOperator::LessThan
            | BinaryOperator::LessEqualThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::GreaterEqualThan
            | BinaryOperator::In
            | BinaryOperator::Instanceof => OperatorPrecedence::Relational,
            BinaryOperator::ShiftLeft
            | BinaryOperator::ShiftRight
            | BinaryOperator::ShiftRightZeroFill => OperatorPrecedence::Shift,
            BinaryOperator::Addition | BinaryOperator::Subtraction => OperatorPrecedence::Additive,
            BinaryOperator::Multiplication
            | BinaryOperator::Division
            | BinaryOperator::Remainder => OperatorPrecedence::Multiplicative,
            BinaryOperator::Exponential => OperatorPrecedence::Exponentiation,
        },
        Expression::UnaryExpression(_) | Expression::AwaitExpression(_) => OperatorPrecedence::Unary,
        Expression::UpdateExpression(_) => OperatorPrecedence::Update,
        Expression::NewExpression(e) if e.arguments.is_empty() => OperatorPrecedence::Member,
        Expression::NewExpression(_) => OperatorPrecedence::LeftHandSide,
        Expression::CallExpression(_) => OperatorPrecedence::LeftHandSide,
        Expression::StaticMemberExpression(_) | Expression::ComputedMemberExpression(_) => {
            OperatorPrecedence::Member
        }
        Expression::TaggedTemplateExpression(_) => OperatorPrecedence::Member,
        // A source paren carries no precedence of its own; `preserve_parens`
        // keeps it as a real node (see the parser's default `ParseOptions`),
        // so skipping through to the wrapped expression's own precedence is
        // what keeps parenthesization decisions correct everywhere this is
        // consulted, not just at the point the paren is finally unwrapped.
        Expression::ParenthesizedExpression(p) => precedence_of(&p.expression),
        _ => OperatorPrecedence::Primary,
    }
}
