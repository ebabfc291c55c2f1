//! Declaration locator
//!
//! Parses step source text into a syntax tree and projects the top-level
//! `config` declaration into a [`StepConfig`]. The locator only pattern
//! matches AST shapes; it never evaluates code, so it is a pure function of
//! the source text.

use crate::extract::schema::StepConfig;
use serde_json::Value;
use syn::{Expr, ExprLit, ExprStruct, Item, Lit, Member};
use thiserror::Error;
use tracing::debug;

/// The fixed identifier the locator searches for among top-level items.
const SENTINEL_IDENT: &str = "config";

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Syntax error in step file: {0}")]
    Syntax(String),
    #[error("No `config` declaration found in file")]
    ConfigNotFound,
}

/// Locates the `config` declaration in `source` and extracts its literal
/// contents.
///
/// A candidate is any top-level `static` or `const` item named `config`
/// whose initializer is a struct literal. All candidates are collected in
/// declaration order and the last one wins; duplicate declarations are not
/// an error.
pub fn locate(source: &str) -> Result<StepConfig, LocateError> {
    let file = syn::parse_file(source).map_err(|e| {
        let start = e.span().start();
        LocateError::Syntax(format!("{} at line {}, column {}", e, start.line, start.column))
    })?;

    let mut candidates: Vec<StepConfig> = Vec::new();
    for item in &file.items {
        let (ident, init) = match item {
            Item::Static(item) => (&item.ident, item.expr.as_ref()),
            Item::Const(item) => (&item.ident, item.expr.as_ref()),
            _ => continue,
        };

        if ident != SENTINEL_IDENT {
            continue;
        }

        if let Expr::Struct(lit) = init {
            debug!(candidate = %ident, "found config declaration");
            candidates.push(project(lit));
        }
    }

    // Last declaration wins when the file contains duplicates.
    candidates.pop().ok_or(LocateError::ConfigNotFound)
}

/// Projects a `config` struct literal through the fixed field table.
///
/// Unknown fields are ignored. Recognized fields with an unrecognized value
/// shape degrade to the field's zero value (empty string / absent sequence)
/// rather than failing the extraction.
fn project(lit: &ExprStruct) -> StepConfig {
    let mut config = StepConfig::default();

    for field in &lit.fields {
        let key = match &field.member {
            Member::Named(ident) => ident.to_string(),
            Member::Unnamed(_) => continue,
        };

        match key.as_str() {
            "name" => config.name = string_value(&field.expr),
            "subscribes" => config.subscribes = string_list(&field.expr),
            "emits" => config.emits = string_list(&field.expr),
            // Schema expressions are not evaluated statically.
            "input" => config.input = Value::Null,
            "flows" => config.flows = string_list(&field.expr),
            _ => {}
        }
    }

    config
}

/// Extracts a string literal's value, or an empty string for any other
/// expression shape.
fn string_value(expr: &Expr) -> String {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => s.value(),
        _ => String::new(),
    }
}

/// Extracts the string-literal elements of an array literal (`[...]` or
/// `&[...]`) in source order, dropping non-string elements. Returns `None`
/// when the expression is not an array literal at all, so downstream JSON
/// can distinguish `null` from `[]`.
fn string_list(expr: &Expr) -> Option<Vec<String>> {
    let array = match expr {
        Expr::Array(array) => array,
        Expr::Reference(reference) => match reference.expr.as_ref() {
            Expr::Array(array) => array,
            _ => return None,
        },
        _ => return None,
    };

    Some(
        array
            .elems
            .iter()
            .filter_map(|elem| match elem {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            })
            .collect(),
    )
}
