//! Built-in naming-convention rules.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | E800 | `class-names` | Class names should use the CapWords convention |
//! | E801 | `function-names` | Function names should be lowercase |
//! | E802..E804 | `argument-names` | Argument names should be lowercase; methods take `self`, classmethods take `cls` |
//! | W800..W803 | `import-as` | Import aliases should keep the imported name's convention |
//! | E805 | `function-variables` | Variables assigned in functions should be lowercase |
//!
//! Every rule here is instantiated once by [`crate::registered_rules`]; a
//! new rule module joins the registry there.

mod argument_names;
mod class_names;
mod function_names;
mod function_variables;
mod import_as;
mod patterns;

pub use argument_names::ArgumentNames;
pub use class_names::ClassNames;
pub use function_names::FunctionNames;
pub use function_variables::FunctionVariables;
pub use import_as::ImportAs;
