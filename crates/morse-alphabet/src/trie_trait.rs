use std::fmt::Debug;

use crate::letter::Letter;
use crate::symbol::Symbol;

/// Identyfikator węzła w drzewie dekodującym (indeks w arenie).
pub type NodeId = usize;

/// Ogólny trait dla drzew przejść sterowanych symbolami kropka/kreska.
///
/// Wymaga `Debug + Send + Sync`, żeby struktury przechowujące drzewo mogły
/// derive(Debug) i być współdzielone między wątkami.
pub trait SymbolTrie: Debug + Send + Sync {
    fn root(&self) -> NodeId;
    /// Dziecko węzła po krawędzi `symbol`; `None` gdy krawędzi nie ma
    /// albo `node` nie należy do drzewa.
    fn child(&self, node: NodeId, symbol: Symbol) -> Option<NodeId>;
    fn letter(&self, node: NodeId) -> Option<Letter>;
    fn node_count(&self) -> usize;
}
