/// The environment module maps names to runtime values.
///
/// An environment is a hash table with chained collision resolution that
/// doubles its bin count under load. Each one may enclose a parent whose
/// bindings are visible when a lookup misses locally; function call frames
/// enclose the global environment this way.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// writes the output of `puts`. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, function calls, and control flow.
/// - Reports runtime errors such as unknown names or invalid operations.
pub mod evaluator;
/// The lexer module defines the raw token stream produced by `logos`.
///
/// It recognizes operators, punctuation, literals, and identifiers, skips
/// whitespace and comments, and counts lines. Keyword resolution happens one
/// layer up in the scanner.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the scanner and
/// constructs an AST that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports arithmetic, comparisons, calls, assignments, and block forms.
pub mod parser;
/// The scanner module turns raw tokens into parser-facing tokens.
///
/// It resolves keywords, keeps each token's lexeme and line, and offers the
/// one-token lookahead the parser works with.
pub mod scanner;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides the type checks used by operators and conditions.
/// - Formats values the way `puts` prints them.
pub mod value;
