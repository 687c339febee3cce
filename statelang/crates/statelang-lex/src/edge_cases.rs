//! Edge case tests for statelang-lex
