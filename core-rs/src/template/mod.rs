/**
 * template module
 *
 * - tokenizer: one-pass `<<token:role>>` segment scanner
 * - resolver: rebuilds an executable query from segments and user bindings
 */

pub mod resolver;
pub mod tokenizer;

pub use resolver::{resolve, scale_factor, Bindings, ParamRole, PRECISION_WORD};
pub use tokenizer::{check_markers, tokenize, Segment, CLOSE_MARKER, OPEN_MARKER};
