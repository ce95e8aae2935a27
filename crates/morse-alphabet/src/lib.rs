// Alfabet Morse'a: symbole, litery, tabela kodów i drzewo dekodujące.
pub mod error;
pub mod symbol;
pub mod letter;
pub mod pattern;
pub mod code_table;
pub mod trie_trait;
pub mod trie;
pub mod traversal;
pub mod iterator;

pub use code_table::{build_table, CodeTable};
pub use error::AlphabetError;
pub use letter::Letter;
pub use pattern::MorsePattern;
pub use symbol::Symbol;
pub use trie::{build_trie, DecodeTrie};
pub use trie_trait::{NodeId, SymbolTrie};
