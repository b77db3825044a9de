use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Binary operators accepted by the macro
#[derive(Clone, Copy)]
enum BinaryOp {
    And,
    Or,
    Implies,
    Xor,
    Iff,
    Nand,
    Nor,
}

impl BinaryOp {
    /// Name of the `Formula` method building this operator
    fn method(self) -> Ident {
        let name = match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Implies => "implies",
            BinaryOp::Xor => "xor",
            BinaryOp::Iff => "iff",
            BinaryOp::Nand => "nand",
            BinaryOp::Nor => "nor",
        };
        Ident::new(name, proc_macro2::Span::call_site())
    }
}

/// AST for formulas
enum Expr {
    Variable(Ident),
    StringLiteral(syn::LitStr),
    Constant(bool),
    Not(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Generate code for this expression using references (no cloning in the macro)
    ///
    /// The fluent `Formula` methods take `&self` and clone their operands, so
    /// identifiers under an operator are only borrowed.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Expr::Variable(ident) => quote! {
                #ident
            },
            Expr::StringLiteral(lit) => quote! {
                Formula::variable(#lit)
            },
            Expr::Constant(value) => quote! {
                Formula::constant(#value)
            },
            Expr::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! {
                    (&(#inner_tokens)).not()
                }
            }
            Expr::Binary(op, left, right) => {
                let method = op.method();
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).#method(&(#right_tokens))
                }
            }
        }
    }
}

/// Parser for formulas with operator precedence
struct FormulaParser {
    expr: Expr,
}

impl Parse for FormulaParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr = parse_iff(input)?;
        Ok(FormulaParser { expr })
    }
}

/// Parse biconditionals (lowest precedence, left associative)
fn parse_iff(input: ParseStream) -> Result<Expr> {
    let mut left = parse_implies(input)?;

    while input.peek(Token![<-]) && input.peek3(Token![>]) {
        input.parse::<Token![<-]>()?;
        input.parse::<Token![>]>()?;
        let right = parse_implies(input)?;
        left = Expr::Binary(BinaryOp::Iff, Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse implications (right associative)
fn parse_implies(input: ParseStream) -> Result<Expr> {
    let left = parse_or(input)?;

    if input.peek(Token![->]) {
        input.parse::<Token![->]>()?;
        let right = parse_implies(input)?;
        return Ok(Expr::Binary(
            BinaryOp::Implies,
            Box::new(left),
            Box::new(right),
        ));
    }

    Ok(left)
}

/// Parse OR and NOR expressions
fn parse_or(input: ParseStream) -> Result<Expr> {
    let mut left = parse_xor(input)?;

    loop {
        let op = if input.peek(Token![|]) {
            input.parse::<Token![|]>()?;
            BinaryOp::Or
        } else if input.peek(Token![-]) && input.peek2(Token![|]) {
            input.parse::<Token![-]>()?;
            input.parse::<Token![|]>()?;
            BinaryOp::Nor
        } else {
            break;
        };
        let right = parse_xor(input)?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse XOR expressions
fn parse_xor(input: ParseStream) -> Result<Expr> {
    let mut left = parse_and(input)?;

    while input.peek(Token![+]) || input.peek(Token![^]) {
        if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
        } else {
            input.parse::<Token![^]>()?;
        }
        let right = parse_and(input)?;
        left = Expr::Binary(BinaryOp::Xor, Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse AND and NAND expressions (higher precedence)
fn parse_and(input: ParseStream) -> Result<Expr> {
    let mut left = parse_unary(input)?;

    loop {
        let op = if input.peek(Token![&]) {
            input.parse::<Token![&]>()?;
            BinaryOp::And
        } else if input.peek(Token![-]) && input.peek2(Token![&]) {
            input.parse::<Token![-]>()?;
            input.parse::<Token![&]>()?;
            BinaryOp::Nand
        } else {
            break;
        };
        let right = parse_unary(input)?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse unary expressions (NOT) and atoms (highest precedence)
fn parse_unary(input: ParseStream) -> Result<Expr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Expr::Not(Box::new(inner)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        let inner = parse_unary(input)?;
        Ok(Expr::Not(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

/// Parse atomic expressions (variables, string literals, constants, and parenthesized expressions)
fn parse_atom(input: ParseStream) -> Result<Expr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_iff(&content)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Expr::StringLiteral(lit))
    } else {
        let ident: Ident = input.parse()?;
        if ident == "T" {
            Ok(Expr::Constant(true))
        } else if ident == "F" {
            Ok(Expr::Constant(false))
        } else {
            Ok(Expr::Variable(ident))
        }
    }
}

/// The `formula!` procedural macro for propositional formulas
///
/// Builds a `Formula` from existing `Formula` values, string literals and the
/// constants `T` and `F`, using the operators of the textual formula syntax.
/// `Formula` must be in scope at the call site.
///
/// # Supported Syntax
///
/// - `p` - any `Formula` identifier in scope
/// - `"p"` - string literal (creates `Formula::variable("p")`)
/// - `T` / `F` - the constants
/// - `~p` or `!p` - negation
/// - `p & q`, `p -& q` - conjunction, negated conjunction
/// - `p + q` or `p ^ q` - exclusive or
/// - `p | q`, `p -| q` - disjunction, negated disjunction
/// - `p -> q` - implication (right associative)
/// - `p <-> q` - biconditional
/// - `(p | q) & r` - parentheses for grouping
///
/// # Operator Precedence
///
/// From highest to lowest: `~`/`!`, `&`/`-&`, `+`/`^`, `|`/`-|`, `->`, `<->`.
///
/// # Examples
///
/// ```ignore
/// use propositional_bases::{formula, Formula};
///
/// // String literals create variables
/// let f = formula!("p" -> "q" | ~"r");
///
/// // Existing formulas are borrowed
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// let g = formula!((p -& q) <-> T);
///
/// // Sub-formulas compose
/// let h = formula!(f & !g);
/// ```
#[proc_macro]
pub fn formula(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as FormulaParser);
    let tokens = parser.expr.to_tokens();
    TokenStream::from(tokens)
}
